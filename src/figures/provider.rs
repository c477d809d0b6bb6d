use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// What a structured-output call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Response body, expected to be JSON matching the requested schema
    Text(String),
    /// The service refused the prompt or the answer; carries its reason code
    Blocked(String),
    Empty,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to generative model failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generative model answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode generative model response: {0}")]
    Decode(String),
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 4096,
        }
    }
}

/// A remote model that can answer with JSON constrained to a schema
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model(&self) -> &str;

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<Generation, LlmError>;
}
