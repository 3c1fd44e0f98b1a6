// HTTP implementation of the data API gateway.
//
// A thin reqwest wrapper: endpoint paths hang off a configured base URL,
// parameters go in the query string, and an optional API key rides along
// as a header. No retries — pacing happens above, in the coordinator.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::traits::ApiGateway;

/// Unauthenticated-by-default HTTP client for the platform data API.
pub struct DataApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DataApiClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// `api_key` may be empty — some gateways are open, others want an
    /// `x-api-key` header on every request.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("raidwatch/0.1 (engagement-verification)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ApiGateway for DataApiClient {
    async fn invoke(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!(endpoint = endpoint, "Data API request");

        let mut request = self.client.get(&url).query(params);
        if !self.api_key.is_empty() {
            request = request.header("x-api-key", &self.api_key);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Data API request failed: {endpoint}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Data API {endpoint} returned {status}: {body}");
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Failed to deserialize {endpoint} response"))
    }
}
