use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::tags::{normalize, WHITESPACE_TAG};
use super::PosPipeline;
use crate::annotation::Annotation;

/// Projects pipeline tokens into part-of-speech annotations
#[derive(Clone)]
pub struct PosExtractor {
    pipeline: Option<Arc<dyn PosPipeline>>,
}

impl PosExtractor {
    pub fn new(pipeline: Arc<dyn PosPipeline>) -> Self {
        Self {
            pipeline: Some(pipeline),
        }
    }

    /// Extractor with no pipeline; every call yields an empty list.
    pub fn degraded() -> Self {
        Self { pipeline: None }
    }

    /// Tags `text`, dropping whitespace tokens and keeping token order.
    ///
    /// Without a pipeline this logs a warning and returns an empty list.
    /// Pipeline failures are returned to the caller.
    pub async fn extract(&self, text: &str) -> Result<Vec<Annotation>> {
        let Some(pipeline) = &self.pipeline else {
            warn!("POS pipeline not loaded, skipping part-of-speech tagging");
            return Ok(Vec::new());
        };

        let tokens = pipeline.tag(text).await?;
        let annotations: Vec<Annotation> = tokens
            .into_iter()
            .filter(|token| token.pos != WHITESPACE_TAG)
            .map(|token| Annotation::new(normalize(&token.pos), token.text))
            .collect();

        info!("{} found {} tagged tokens", pipeline.model(), annotations.len());
        Ok(annotations)
    }
}
