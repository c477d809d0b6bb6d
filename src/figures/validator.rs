//! Validation of the model's figure-of-speech payload.
//!
//! The payload is untrusted. Whole-payload problems (not JSON, not a list)
//! are reported; individual malformed items are dropped without an error so
//! one bad item never costs the valid ones.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::annotation::{Annotation, FigureKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Figure of speech analysis returned invalid JSON.")]
    InvalidJson,
    #[error("Figure of speech analysis returned unexpected data format.")]
    UnexpectedFormat,
}

/// Items that passed validation, plus the whole-payload error if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureValidation {
    pub figures: Vec<Annotation>,
    pub error: Option<PayloadError>,
}

impl FigureValidation {
    fn failed(error: PayloadError) -> Self {
        Self {
            figures: Vec::new(),
            error: Some(error),
        }
    }
}

#[derive(Deserialize)]
struct FoundFigure {
    #[serde(rename = "type")]
    kind: FigureKind,
    text: String,
}

pub fn validate(raw: &str) -> FigureValidation {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            debug!("Figure payload is not JSON: {}", e);
            return FigureValidation::failed(PayloadError::InvalidJson);
        }
    };

    let Value::Array(items) = parsed else {
        return FigureValidation::failed(PayloadError::UnexpectedFormat);
    };

    let total = items.len();
    let figures: Vec<Annotation> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| validate_item(idx, item))
        .collect();

    if figures.len() < total {
        debug!("Dropped {} of {} figure items", total - figures.len(), total);
    }

    FigureValidation { figures, error: None }
}

fn validate_item(idx: usize, item: Value) -> Option<Annotation> {
    if !item.is_object() {
        debug!("Figure item {} is not an object", idx);
        return None;
    }

    match serde_json::from_value::<FoundFigure>(item) {
        Ok(found) if !found.text.is_empty() => Some(Annotation::figure(found.kind, found.text)),
        Ok(_) => {
            debug!("Figure item {} has empty text", idx);
            None
        }
        Err(e) => {
            debug!("Figure item {} rejected: {}", idx, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_payload_keeps_only_valid_items() {
        let raw = r#"[
            {"type":"metaphor","text":"time is a thief"},
            {"type":"simile","text":"fast as lightning"},
            {"type":"noun","text":"bad"},
            {"foo":"bar"},
            "not-an-object"
        ]"#;
        let out = validate(raw);
        assert_eq!(out.error, None);
        assert_eq!(
            out.figures,
            vec![
                Annotation::new("metaphor", "time is a thief"),
                Annotation::new("simile", "fast as lightning"),
            ]
        );
    }

    #[test]
    fn test_not_json() {
        let out = validate("not json");
        assert!(out.figures.is_empty());
        assert_eq!(out.error, Some(PayloadError::InvalidJson));
    }

    #[test]
    fn test_object_instead_of_list() {
        let out = validate(r#"{"type":"metaphor","text":"x"}"#);
        assert!(out.figures.is_empty());
        assert_eq!(out.error, Some(PayloadError::UnexpectedFormat));
    }

    #[test]
    fn test_wrong_case_and_wrong_types_are_dropped() {
        let raw = r#"[
            {"type":"Metaphor","text":"a"},
            {"type":"simile","text":42},
            {"type":"simile"},
            {"text":"no type"},
            {"type":"metaphor","text":""},
            null,
            [1, 2],
            {"type":"simile","text":"like a rock"}
        ]"#;
        let out = validate(raw);
        assert_eq!(out.error, None);
        assert_eq!(out.figures, vec![Annotation::new("simile", "like a rock")]);
    }

    #[test]
    fn test_extra_keys_and_duplicates_are_kept() {
        let raw = r#"[
            {"type":"metaphor","text":"a sea of troubles","confidence":0.9},
            {"type":"metaphor","text":"a sea of troubles"}
        ]"#;
        let out = validate(raw);
        assert_eq!(out.figures.len(), 2);
        assert_eq!(out.figures[0], out.figures[1]);
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert_eq!(validate("[]"), FigureValidation::default());
    }

    #[test]
    fn test_revalidating_output_is_stable() {
        let raw = r#"[
            {"type":"simile","text":"as cold as ice"},
            {"type":"metaphor","text":"the world is a stage"}
        ]"#;
        let first = validate(raw);
        let reserialized = serde_json::to_string(&first.figures).unwrap();
        let second = validate(&reserialized);
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PayloadError::InvalidJson.to_string(),
            "Figure of speech analysis returned invalid JSON."
        );
        assert_eq!(
            PayloadError::UnexpectedFormat.to_string(),
            "Figure of speech analysis returned unexpected data format."
        );
    }
}
