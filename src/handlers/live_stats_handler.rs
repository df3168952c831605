use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::insight::engine::build_game_insight;
use crate::services::{FootballApiClient, TtlCache};

use super::upstream_unavailable;

#[derive(Debug, serde::Deserialize)]
pub struct LiveStatsQuery {
    pub sport: Option<String>,
    pub half: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sport {
    Football,
    Nba,
    Nfl,
}

impl Sport {
    fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            None | Some("football") => Ok(Sport::Football),
            Some("nba") => Ok(Sport::Nba),
            Some("nfl") => Ok(Sport::Nfl),
            Some(other) => Err(other.to_string()),
        }
    }
}

/// Full live insight for one game: fixture detail, normalized
/// statistics, classified event feed, lineups, players and the
/// stoppage-time estimate.
#[tracing::instrument(
    name = "Live game stats",
    skip(client, cache, query),
    fields(game_id = %game_id, sport = ?query.sport, half = ?query.half)
)]
pub async fn live_game_stats(
    game_id: i64,
    query: web::Query<LiveStatsQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> HttpResponse {
    let sport = match Sport::parse(query.sport.as_deref()) {
        Ok(sport) => sport,
        Err(other) => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Unknown sport '{}'", other)
            }));
        }
    };
    if sport != Sport::Football {
        // NBA/NFL remain unfinished paths.
        return HttpResponse::NotImplemented().json(json!({
            "success": false,
            "message": "Only football is supported at the moment"
        }));
    }

    let half_view = query.half.unwrap_or(false);
    let cache_key = format!("stats-aovivo:{}:{}", game_id, half_view);
    if let Some(cached) = cache.get(&cache_key) {
        return HttpResponse::Ok().json(cached);
    }

    let fixture = match client.fixture_by_id(game_id).await {
        Ok(Some(fixture)) => fixture,
        Ok(None) => {
            tracing::warn!("Game {} not found upstream", game_id);
            return HttpResponse::NotFound().json(json!({
                "success": false,
                "message": format!("Game {} not found", game_id)
            }));
        }
        Err(error) => return upstream_unavailable(error),
    };

    // The optional sections degrade to empty structures instead of
    // failing the whole response.
    let (events, statistics, lineups, players) = futures::join!(
        client.fixture_events(game_id),
        client.fixture_statistics(game_id),
        client.fixture_lineups(game_id),
        client.fixture_players(game_id),
    );
    let events = events.unwrap_or_else(|error| {
        tracing::warn!("Events unavailable for game {}: {}", game_id, error);
        Vec::new()
    });
    let statistics = statistics.unwrap_or_else(|error| {
        tracing::warn!("Statistics unavailable for game {}: {}", game_id, error);
        Vec::new()
    });
    let lineups = lineups.unwrap_or_else(|error| {
        tracing::warn!("Lineups unavailable for game {}: {}", game_id, error);
        Vec::new()
    });
    let players = players.unwrap_or_else(|error| {
        tracing::warn!("Players unavailable for game {}: {}", game_id, error);
        Vec::new()
    });

    let insight = build_game_insight(&fixture, &events, &statistics, lineups, players, half_view);
    tracing::info!(
        "Built insight for game {} with {} events",
        game_id,
        insight.events.len()
    );

    let body = serde_json::to_value(&insight).unwrap_or_else(|_| json!({}));
    cache.put(&cache_key, body.clone());
    HttpResponse::Ok().json(body)
}
