//! Prompt and response schema for figure-of-speech detection

use serde_json::{json, Value};

use crate::annotation::FigureKind;

/// Instruction asking the model for a bare JSON list of `{type, text}` objects.
pub fn build_prompt(text: &str) -> String {
    format!(
        "Please analyze the following text to identify metaphors and similes.\n\
         Return your findings strictly as a JSON list. \
         Each item in the list must be an object containing exactly two keys:\n\
         1.  `type`: Must be either \"metaphor\" or \"simile\".\n\
         2.  `text`: Must be the exact text segment identified.\n\
         Ensure every object in the list has both the 'type' and 'text' keys.\n\
         Text to analyze:\n---\n{}\n---\nJSON List:",
        text
    )
}

/// OpenAPI-subset schema for the model's structured output
pub fn response_schema() -> Value {
    let kinds: Vec<&str> = FigureKind::ALL.iter().map(|k| k.as_str()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": { "type": "STRING", "enum": kinds },
                "text": { "type": "STRING" }
            },
            "required": ["type", "text"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let text = "Her voice was music,\nlike \"bells\" {ringing}.";
        let prompt = build_prompt(text);
        assert!(prompt.contains(&format!("---\n{}\n---", text)));
        assert!(prompt.ends_with("JSON List:"));
        assert!(prompt.contains("\"metaphor\" or \"simile\""));
    }

    #[test]
    fn test_schema_enumerates_figure_kinds() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["properties"]["type"]["enum"], json!(["metaphor", "simile"]));
        assert_eq!(schema["items"]["required"], json!(["type", "text"]));
    }
}
