//! Typed client for the API-Sports football provider.
//!
//! All upstream calls share one bounded timeout and carry the account
//! key in the `x-apisports-key` header. Responses arrive wrapped in a
//! `{"response": [...]}` envelope whose shape is not guaranteed; the
//! envelope is normalized into a plain item list at this boundary so
//! the rest of the crate only ever sees one canonical shape.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::settings::ProviderSettings;
use crate::models::provider::{LiveFixture, MatchEvent, TeamStatistics};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone)]
pub struct FootballApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    timeout: Duration,
}

impl FootballApiClient {
    pub fn new(settings: &ProviderSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_seconds),
        }
    }

    pub async fn live_fixtures(&self) -> Result<Vec<LiveFixture>, ProviderError> {
        let items = self
            .get_envelope("/fixtures", &[("live", "all".to_string())])
            .await?;
        Ok(decode_items(items))
    }

    pub async fn fixture_by_id(&self, game_id: i64) -> Result<Option<LiveFixture>, ProviderError> {
        let items = self
            .get_envelope("/fixtures", &[("id", game_id.to_string())])
            .await?;
        Ok(decode_items(items).into_iter().next())
    }

    pub async fn fixture_events(&self, game_id: i64) -> Result<Vec<MatchEvent>, ProviderError> {
        let items = self
            .get_envelope("/fixtures/events", &[("fixture", game_id.to_string())])
            .await?;
        Ok(decode_items(items))
    }

    pub async fn fixture_statistics(
        &self,
        game_id: i64,
    ) -> Result<Vec<TeamStatistics>, ProviderError> {
        let items = self
            .get_envelope("/fixtures/statistics", &[("fixture", game_id.to_string())])
            .await?;
        Ok(decode_items(items))
    }

    pub async fn fixture_lineups(&self, game_id: i64) -> Result<Vec<Value>, ProviderError> {
        self.get_envelope("/fixtures/lineups", &[("fixture", game_id.to_string())])
            .await
    }

    pub async fn fixture_players(&self, game_id: i64) -> Result<Vec<Value>, ProviderError> {
        self.get_envelope("/fixtures/players", &[("fixture", game_id.to_string())])
            .await
    }

    async fn get_envelope(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>, ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("Calling provider at {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header("x-apisports-key", self.api_key.expose_secret())
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Provider returned HTTP {} for {}", status, url);
            return Err(ProviderError::Status(status));
        }

        let body: Value = response.json().await?;
        Ok(envelope_items(&body))
    }
}

/// Normalize the provider envelope into a flat item list.
///
/// Known variants across provider versions: `response` as a list,
/// `response` as a single object, or no `response` key at all. Anything
/// unrecognized degrades to an empty list.
fn envelope_items(body: &Value) -> Vec<Value> {
    match body.get("response") {
        Some(Value::Array(items)) => items.clone(),
        Some(object @ Value::Object(_)) => vec![object.clone()],
        _ => Vec::new(),
    }
}

/// Decode envelope items, skipping entries that do not fit the expected
/// shape instead of failing the whole response.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(decoded) => Some(decoded),
            Err(error) => {
                tracing::warn!("Skipping malformed provider item: {}", error);
                None
            }
        })
        .collect()
}
