//! HTTP client for the generation endpoint.
//!
//! One POST per call, no retries, no shared-state side effects. The caller
//! validates the config before invoking this.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, DEFAULT_FAILURE_MESSAGE};
use crate::models::IconConfig;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(flatten)]
    config: &'a IconConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
}

impl GenerationClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Sends one generation request and returns the image reference from a
    /// successful response.
    pub async fn generate(
        &self,
        endpoint: &str,
        config: &IconConfig,
        api_key: Option<&str>,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", endpoint.trim_end_matches('/'));
        debug!("generation POST {} (style {})", url, config.style.as_str());

        let response = self
            .http
            .post(&url)
            .json(&GenerateRequest { config, api_key })
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            warn!("generation endpoint returned {}: {}", status, message);
            return Err(GenerationError::Rejected(message));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        body.image_url.ok_or(GenerationError::Malformed)
    }
}
