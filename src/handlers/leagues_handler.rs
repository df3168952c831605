use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::insight::engine::distinct_leagues;
use crate::services::{FootballApiClient, TtlCache};

use super::upstream_unavailable;

#[derive(Debug, serde::Deserialize)]
pub struct LeaguesQuery {
    pub country: Option<String>,
}

/// Distinct leagues with at least one fixture currently live.
#[tracing::instrument(
    name = "List live leagues",
    skip(query, client, cache),
    fields(country = ?query.country)
)]
pub async fn list_live_leagues(
    query: web::Query<LeaguesQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> HttpResponse {
    let cache_key = format!("ligas:{}", query.country.as_deref().unwrap_or("*"));
    if let Some(cached) = cache.get(&cache_key) {
        return HttpResponse::Ok().json(cached);
    }

    match client.live_fixtures().await {
        Ok(fixtures) => {
            let mut leagues = distinct_leagues(&fixtures);
            if let Some(country) = query.country.as_deref() {
                leagues.retain(|league| {
                    league
                        .country
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(country))
                });
            }
            tracing::info!("Listing {} live leagues", leagues.len());

            let body = serde_json::to_value(&leagues).unwrap_or_else(|_| json!([]));
            cache.put(&cache_key, body.clone());
            HttpResponse::Ok().json(body)
        }
        Err(error) => upstream_unavailable(error),
    }
}
