pub mod cache_service;
pub mod provider_client;
pub mod telemetry;

pub use cache_service::TtlCache;
pub use provider_client::{FootballApiClient, ProviderError};
