use actix_web::web;

pub mod backend_health;
pub mod leagues;
pub mod live_games;
pub mod live_stats;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(leagues::live_leagues)
        .service(live_games::live_games)
        .service(live_stats::live_stats);
}
