use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::insight::engine::live_game_summary;
use crate::services::{FootballApiClient, TtlCache};

use super::upstream_unavailable;

#[derive(Debug, serde::Deserialize)]
pub struct LiveGamesQuery {
    pub league: Option<i64>,
}

/// All fixtures currently live, optionally narrowed to one league.
#[tracing::instrument(
    name = "List live games",
    skip(query, client, cache),
    fields(league = ?query.league)
)]
pub async fn list_live_games(
    query: web::Query<LiveGamesQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> HttpResponse {
    let cache_key = format!(
        "jogos-aovivo:{}",
        query
            .league
            .map(|id| id.to_string())
            .unwrap_or_else(|| "*".to_string())
    );
    if let Some(cached) = cache.get(&cache_key) {
        return HttpResponse::Ok().json(cached);
    }

    match client.live_fixtures().await {
        Ok(fixtures) => {
            let games: Vec<_> = fixtures
                .iter()
                .filter(|fixture| match query.league {
                    Some(league_id) => fixture.league.id == Some(league_id),
                    None => true,
                })
                .map(live_game_summary)
                .collect();
            tracing::info!("Listing {} live games", games.len());

            let body = serde_json::to_value(&games).unwrap_or_else(|_| json!([]));
            cache.put(&cache_key, body.clone());
            HttpResponse::Ok().json(body)
        }
        Err(error) => upstream_unavailable(error),
    }
}
