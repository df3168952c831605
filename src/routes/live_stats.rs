use actix_web::{get, web, Responder};

use crate::handlers::live_stats_handler::{live_game_stats, LiveStatsQuery};
use crate::services::{FootballApiClient, TtlCache};

#[get("/stats-aovivo/{game_id}")]
pub async fn live_stats(
    path: web::Path<i64>,
    query: web::Query<LiveStatsQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> impl Responder {
    live_game_stats(path.into_inner(), query, client, cache).await
}
