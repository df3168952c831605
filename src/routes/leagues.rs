use actix_web::{get, web, Responder};

use crate::handlers::leagues_handler::{list_live_leagues, LeaguesQuery};
use crate::services::{FootballApiClient, TtlCache};

#[get("/ligas")]
pub async fn live_leagues(
    query: web::Query<LeaguesQuery>,
    client: web::Data<FootballApiClient>,
    cache: web::Data<TtlCache>,
) -> impl Responder {
    list_live_leagues(query, client, cache).await
}
