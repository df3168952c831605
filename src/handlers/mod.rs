pub mod backend_health_handler;
pub mod leagues_handler;
pub mod live_games_handler;
pub mod live_stats_handler;

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ProviderError;

/// Map an upstream failure to the user-facing 503. Raw provider error
/// bodies are never forwarded.
pub(crate) fn upstream_unavailable(error: ProviderError) -> HttpResponse {
    tracing::error!("Upstream provider call failed: {}", error);
    HttpResponse::ServiceUnavailable().json(json!({
        "success": false,
        "message": "Sports data provider is currently unavailable"
    }))
}
