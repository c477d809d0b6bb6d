use serde::{Deserialize, Serialize};

/// Kinds of figure of speech the remote model is asked to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Metaphor,
    Simile,
}

impl FigureKind {
    pub const ALL: [FigureKind; 2] = [FigureKind::Metaphor, FigureKind::Simile];

    pub fn as_str(&self) -> &'static str {
        match self {
            FigureKind::Metaphor => "metaphor",
            FigureKind::Simile => "simile",
        }
    }
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled span of the input text.
///
/// Figures of speech and parts of speech share this shape; `kind` is either a
/// [`FigureKind`] name or a normalized part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl Annotation {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    pub fn figure(kind: FigureKind, text: impl Into<String>) -> Self {
        Self::new(kind.as_str(), text)
    }
}

/// Combined outcome of one `/analyze` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub figures_of_speech: Vec<Annotation>,
    pub parts_of_speech: Vec<Annotation>,
    /// Messages from both analysis steps, parts of speech first
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_serializes_kind_as_type() {
        let a = Annotation::figure(FigureKind::Simile, "fast as lightning");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "simile", "text": "fast as lightning" }));
    }

    #[test]
    fn test_figure_kind_is_case_sensitive() {
        assert!(serde_json::from_str::<FigureKind>("\"metaphor\"").is_ok());
        assert!(serde_json::from_str::<FigureKind>("\"Metaphor\"").is_err());
    }

    #[test]
    fn test_empty_result_has_all_keys() {
        let json = serde_json::to_value(AnalysisResult::default()).unwrap();
        assert_eq!(json["figures_of_speech"], serde_json::json!([]));
        assert_eq!(json["parts_of_speech"], serde_json::json!([]));
        assert_eq!(json["errors"], serde_json::json!([]));
    }
}
