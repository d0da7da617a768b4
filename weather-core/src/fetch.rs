//! JSON fetching over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::{fmt::Debug, time::Duration};

use crate::error::FetchError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("weather-cli/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a URL into a JSON document.
#[async_trait]
pub trait JsonSource: Send + Sync + Debug {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl JsonSource for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url = %redact_query(url), "GET");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_json(&body)
    }
}

/// Parse a full response body.
pub fn parse_json(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(FetchError::Json)
}

// Query strings carry the API key.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
