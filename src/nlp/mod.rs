//! NLP Module
//!
//! Part-of-speech tagging. The tagger itself is an external pipeline behind
//! the [`PosPipeline`] trait; this crate only normalizes and filters its
//! output.

mod extractor;
mod remote;
pub mod tags;

pub use extractor::PosExtractor;
pub use remote::RemotePosPipeline;
pub use tags::{normalize, standard_tags, PosTagMap, WHITESPACE_TAG};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One token as produced by the tagging pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub text: String,
    /// Coarse tag code, e.g. `NOUN`
    pub pos: String,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
        }
    }
}

/// A loaded part-of-speech tagging pipeline
#[async_trait]
pub trait PosPipeline: Send + Sync {
    /// Name of the underlying model, for logging
    fn model(&self) -> &str;

    /// Tokenize and tag `text`, in reading order.
    async fn tag(&self, text: &str) -> Result<Vec<Token>>;
}
