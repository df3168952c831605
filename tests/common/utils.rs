use std::net::TcpListener;

use once_cell::sync::Lazy;
use secrecy::SecretString;
use serde_json::{json, Value};

use radar_backend::config::settings::{
    ApplicationSettings, CacheSettings, ProviderSettings, Settings,
};
use radar_backend::run;
use radar_backend::services::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub provider: mockito::ServerGuard,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let provider = mockito::Server::new_async().await;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();

    let settings = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port,
            log_level: "info".to_string(),
        },
        provider: ProviderSettings {
            base_url: provider.url(),
            api_key: SecretString::new("test-key".to_string().into_boxed_str()),
            timeout_seconds: 5,
        },
        // Zero TTL: every request recomputes, so each test observes the
        // mocks it just registered.
        cache: CacheSettings { ttl_seconds: 0 },
    };

    let server = run(listener, settings).expect("Failed to start test server");
    tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        provider,
    }
}

/// One `/fixtures?live=all` entry in the provider's envelope shape.
pub fn live_fixture(
    game_id: i64,
    league: (i64, &str, &str),
    home: (i64, &str),
    away: (i64, &str),
    elapsed: i64,
    status_short: &str,
) -> Value {
    json!({
        "fixture": {
            "id": game_id,
            "date": "2026-08-06T19:00:00+00:00",
            "status": {"long": "In Play", "short": status_short, "elapsed": elapsed}
        },
        "league": {"id": league.0, "name": league.1, "country": league.2},
        "teams": {
            "home": {"id": home.0, "name": home.1},
            "away": {"id": away.0, "name": away.1}
        },
        "goals": {"home": 1, "away": 0}
    })
}

/// One `/fixtures/events` entry.
pub fn match_event(team: (i64, &str), kind: &str, detail: &str, elapsed: i64) -> Value {
    json!({
        "time": {"elapsed": elapsed, "extra": null},
        "team": {"id": team.0, "name": team.1},
        "player": {"id": 99, "name": "Player"},
        "assist": {"id": null, "name": null},
        "type": kind,
        "detail": detail,
        "comments": null
    })
}

pub fn envelope(items: Vec<Value>) -> Value {
    json!({
        "get": "fixtures",
        "results": items.len(),
        "response": items
    })
}
