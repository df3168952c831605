use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use actix_cors::Cors;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
mod handlers;
pub mod insight;
pub mod models;
mod routes;
pub mod services;

use crate::config::settings::Settings;
use crate::routes::init_routes;
use crate::services::{FootballApiClient, TtlCache};

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let provider_client = web::Data::new(FootballApiClient::new(&settings.provider));
    let cache = web::Data::new(TtlCache::new(&settings.cache));

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("https://jean-rgsocd.github.io")
            .allowed_origin("http://127.0.0.1:5500")
            .allowed_origin("http://localhost:5500")
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(provider_client.clone())
            .app_data(cache.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
