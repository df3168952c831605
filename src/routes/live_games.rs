use actix_web::{get, web, Responder};

use crate::handlers::live_games_handler::{list_live_games, LiveGamesQuery};
use crate::services::{FootballApiClient, TtlCache};

#[get("/jogos-aovivo")]
pub async fn live_games(
    query: web::Query<LiveGamesQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> impl Responder {
    list_live_games(query, client, cache).await
}
