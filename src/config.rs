//! Runtime configuration read from the environment (and `.env`).

use std::env;

use thiserror::Error;

use crate::figures::gemini::{BLOCK_MEDIUM_AND_ABOVE, DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::figures::GenerationSettings;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_POS_MODEL: &str = "en_core_web_sm";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not found in environment variables.")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub generation: GenerationSettings,
    pub safety_threshold: String,
    /// Base URL of the POS tagging sidecar; `None` runs without tagging
    pub pos_service_url: Option<String>,
    pub pos_model: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = var(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            generation: GenerationSettings::default(),
            safety_threshold: BLOCK_MEDIUM_AND_ABOVE.to_string(),
            pos_service_url: var("POS_SERVICE_URL"),
            pos_model: var("POS_MODEL").unwrap_or_else(|| DEFAULT_POS_MODEL.to_string()),
            bind_addr: var("ANNOTATOR_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
