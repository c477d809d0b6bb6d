use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::annotation::{AnalysisResult, Annotation};
use crate::figures::{self, Generation, GenerativeModel};
use crate::nlp::PosExtractor;

pub const POS_FAILURE: &str = "Failed to analyze parts of speech.";
pub const FIGURE_API_FAILURE: &str = "Error communicating with figure of speech analysis API.";
pub const FIGURE_EMPTY_RESPONSE: &str = "Figure of speech analysis returned empty response.";

/// Runs both annotation steps for a request and merges their outcomes.
///
/// Neither step can fail the whole analysis: each failure becomes a message
/// in [`AnalysisResult::errors`], parts of speech first.
#[derive(Clone)]
pub struct Analyzer {
    pos: PosExtractor,
    model: Arc<dyn GenerativeModel>,
    schema: Arc<Value>,
}

/// Outcome of one analysis step: its annotations and at most one error.
type StepOutcome = (Vec<Annotation>, Option<String>);

impl Analyzer {
    pub fn new(pos: PosExtractor, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            pos,
            model,
            schema: Arc::new(figures::response_schema()),
        }
    }

    /// `text` must be non-blank; the HTTP layer rejects blank input.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        let ((parts_of_speech, pos_error), (figures_of_speech, figure_error)) =
            tokio::join!(self.parts_of_speech(text), self.figures_of_speech(text));

        let errors: Vec<String> = pos_error.into_iter().chain(figure_error).collect();
        if !errors.is_empty() {
            warn!("Analysis finished with {} error(s)", errors.len());
        }

        AnalysisResult {
            figures_of_speech,
            parts_of_speech,
            errors,
        }
    }

    async fn parts_of_speech(&self, text: &str) -> StepOutcome {
        match self.pos.extract(text).await {
            Ok(tags) => (tags, None),
            Err(e) => {
                error!("Error during part-of-speech analysis: {:#}", e);
                (Vec::new(), Some(POS_FAILURE.to_string()))
            }
        }
    }

    async fn figures_of_speech(&self, text: &str) -> StepOutcome {
        let prompt = figures::build_prompt(text);

        let generation = match self.model.generate_json(&prompt, &self.schema).await {
            Ok(g) => g,
            Err(e) => {
                error!("Error calling {}: {}", self.model.model(), e);
                return (Vec::new(), Some(FIGURE_API_FAILURE.to_string()));
            }
        };

        match generation {
            Generation::Blocked(reason) => {
                warn!("Figure of speech request blocked: {}", reason);
                (Vec::new(), Some(format!("Figure of speech analysis blocked ({}).", reason)))
            }
            Generation::Empty => (Vec::new(), Some(FIGURE_EMPTY_RESPONSE.to_string())),
            Generation::Text(raw) => {
                let validated = figures::validate(&raw);
                info!(
                    "{} returned {} valid figure(s)",
                    self.model.model(),
                    validated.figures.len()
                );
                (validated.figures, validated.error.map(|e| e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::LlmError;
    use crate::nlp::{PosPipeline, Token};
    use async_trait::async_trait;

    struct StaticModel(Result<Generation, u16>);

    #[async_trait]
    impl GenerativeModel for StaticModel {
        fn model(&self) -> &str {
            "static"
        }

        async fn generate_json(
            &self,
            _prompt: &str,
            _schema: &Value,
        ) -> Result<Generation, LlmError> {
            match &self.0 {
                Ok(g) => Ok(g.clone()),
                Err(status) => Err(LlmError::Status {
                    status: *status,
                    body: "denied".to_string(),
                }),
            }
        }
    }

    struct BrokenPipeline;

    #[async_trait]
    impl PosPipeline for BrokenPipeline {
        fn model(&self) -> &str {
            "broken"
        }

        async fn tag(&self, _text: &str) -> anyhow::Result<Vec<Token>> {
            anyhow::bail!("model crashed")
        }
    }

    fn analyzer(
        pipeline: Option<Arc<dyn PosPipeline>>,
        outcome: Result<Generation, u16>,
    ) -> Analyzer {
        let pos = match pipeline {
            Some(p) => PosExtractor::new(p),
            None => PosExtractor::degraded(),
        };
        Analyzer::new(pos, Arc::new(StaticModel(outcome)))
    }

    #[tokio::test]
    async fn test_blocked_reason_is_reported() {
        let a = analyzer(None, Ok(Generation::Blocked("OTHER".to_string())));
        let res = a.analyze("text").await;
        assert!(res.figures_of_speech.is_empty());
        assert_eq!(res.errors, vec!["Figure of speech analysis blocked (OTHER).".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_response() {
        let a = analyzer(None, Ok(Generation::Empty));
        let res = a.analyze("text").await;
        assert_eq!(res.errors, vec![FIGURE_EMPTY_RESPONSE.to_string()]);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let a = analyzer(None, Err(401));
        let res = a.analyze("text").await;
        assert_eq!(res.errors, vec![FIGURE_API_FAILURE.to_string()]);
    }

    #[tokio::test]
    async fn test_errors_are_ordered_pos_first() {
        let a = analyzer(Some(Arc::new(BrokenPipeline)), Ok(Generation::Text("nope".to_string())));
        let res = a.analyze("text").await;
        assert_eq!(
            res.errors,
            vec![
                POS_FAILURE.to_string(),
                "Figure of speech analysis returned invalid JSON.".to_string(),
            ]
        );
    }
}
