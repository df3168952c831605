use std::net::TcpListener;

use radar_backend::config::settings::get_config;
use radar_backend::run;
use radar_backend::services::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "radar-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, config)?.await
}
