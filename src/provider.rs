//! Remote search service client.
//!
//! [`SearchProvider`] is the seam between the query lifecycle and the
//! network: the controller and the stats view only see the trait, so tests
//! substitute an in-process double. [`HttpProvider`] is the real
//! implementation, with bounded retry and exponential backoff for transient
//! failures:
//! - HTTP 429 (rate limited) and 5xx (server error) → retry
//! - HTTP 4xx (client error, not 429) → fail immediately
//! - Network errors → retry
//! - Backoff: 1s, 2s, 4s, 8s, 16s, 32s (capped at 2^5)

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::config::ProviderConfig;
use crate::models::{IndexStats, QueryResponse};

/// Client-side contract of the remote search service.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search. The trimmed query is the sole request payload.
    async fn search(&self, query: &str) -> Result<QueryResponse>;

    /// Fetch index statistics. Takes no arguments.
    async fn stats(&self) -> Result<IndexStats>;
}

/// HTTP implementation of [`SearchProvider`] backed by `reqwest`.
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
}

impl HttpProvider {
    /// Create a provider from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// POST a JSON body and decode a JSON response, retrying transient
    /// failures per the module-level strategy.
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}{}", self.endpoint, path);
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, 8s, ...
                let delay = Duration::from_secs(1 << (attempt - 1).min(5));
                tokio::time::sleep(delay).await;
            }

            let resp = self.client.post(&url).json(body).send().await;

            match resp {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return response
                            .json::<T>()
                            .await
                            .with_context(|| format!("Malformed response from {}", url));
                    }

                    // Rate limited or server error — retry
                    if status.as_u16() == 429 || status.is_server_error() {
                        let body_text = response.text().await.unwrap_or_default();
                        last_err = Some(anyhow::anyhow!(
                            "Search service error {}: {}",
                            status,
                            body_text
                        ));
                        continue;
                    }

                    // Client error (not 429) — don't retry
                    let body_text = response.text().await.unwrap_or_default();
                    bail!("Search service error {}: {}", status, body_text);
                }
                Err(e) => {
                    last_err = Some(anyhow::anyhow!(
                        "Search service unreachable at {}: {}",
                        url,
                        e
                    ));
                    continue;
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("Request failed after retries")))
    }
}

#[async_trait]
impl SearchProvider for HttpProvider {
    async fn search(&self, query: &str) -> Result<QueryResponse> {
        let body = serde_json::json!({ "query": query });
        self.post_json("/query", &body).await
    }

    async fn stats(&self) -> Result<IndexStats> {
        self.post_json("/stats", &serde_json::json!({})).await
    }
}
