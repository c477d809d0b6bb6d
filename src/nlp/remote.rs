use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{PosPipeline, Token};

/// Tagging pipeline served by an out-of-process spaCy sidecar.
///
/// The sidecar exposes `GET /health` and `POST /parse`, the latter answering
/// `{"tokens": [{"text": "...", "pos": "NOUN"}, ...]}`.
pub struct RemotePosPipeline {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct ParseResponse {
    tokens: Vec<Token>,
}

impl RemotePosPipeline {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Connects to the sidecar and checks that it is serving.
    pub async fn load(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let pipeline = Self::new(base_url, model);
        let url = format!("{}/health", pipeline.base_url);

        pipeline
            .client
            .get(&url)
            .query(&[("model", pipeline.model.as_str())])
            .send()
            .await
            .with_context(|| format!("POS service unreachable at {}", pipeline.base_url))?
            .error_for_status()
            .with_context(|| format!("POS service at {} is not ready", pipeline.base_url))?;

        info!("POS model '{}' loaded via {}", pipeline.model, pipeline.base_url);
        Ok(pipeline)
    }
}

#[async_trait]
impl PosPipeline for RemotePosPipeline {
    fn model(&self) -> &str {
        &self.model
    }

    async fn tag(&self, text: &str) -> Result<Vec<Token>> {
        debug!("Tagging {} bytes with '{}'", text.len(), self.model);

        let body = ParseRequest { text, model: &self.model };
        let res = self
            .client
            .post(format!("{}/parse", self.base_url))
            .json(&body)
            .send()
            .await
            .context("Failed to send POS request")?
            .error_for_status()?;

        let parsed: ParseResponse = res
            .json()
            .await
            .context("Failed to parse tokens from POS response")?;

        Ok(parsed.tokens)
    }
}
