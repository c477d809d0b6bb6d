//! Part-of-speech tag normalization
//!
//! Maps the coarse Universal Dependencies codes emitted by the tagging
//! pipeline to the labels shown to users.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Coarse tag the pipeline assigns to pure whitespace tokens
pub const WHITESPACE_TAG: &str = "SPACE";

const WHITESPACE_LABEL: &str = "space";

const POS_TAGS: [(&str, &str); 19] = [
    ("ADJ", "adjective"),
    ("ADP", "adposition"),
    ("ADV", "adverb"),
    ("AUX", "auxiliary"),
    ("CONJ", "conjunction"),
    ("CCONJ", "coord_conjunction"),
    ("DET", "determiner"),
    ("INTJ", "interjection"),
    ("NOUN", "noun"),
    ("NUM", "numeral"),
    ("PART", "particle"),
    ("PRON", "pronoun"),
    ("PROPN", "proper_noun"),
    ("PUNCT", "punctuation"),
    ("SCONJ", "subord_conjunction"),
    ("SYM", "symbol"),
    ("VERB", "verb"),
    ("X", "other"),
    (WHITESPACE_TAG, WHITESPACE_LABEL),
];

lazy_static! {
    static ref STANDARD: PosTagMap = PosTagMap::standard();
}

/// Read-only lookup from coarse tag code to display label
#[derive(Debug, Clone)]
pub struct PosTagMap {
    labels: HashMap<&'static str, &'static str>,
}

impl PosTagMap {
    fn standard() -> Self {
        Self {
            labels: POS_TAGS.iter().copied().collect(),
        }
    }

    /// Label for `code`, or the lower-cased code when it is not in the table.
    pub fn normalize(&self, code: &str) -> String {
        match self.labels.get(code) {
            Some(label) => (*label).to_string(),
            None => code.to_lowercase(),
        }
    }

    /// Sorted labels a token can end up with, whitespace excluded
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self
            .labels
            .values()
            .copied()
            .filter(|label| *label != WHITESPACE_LABEL)
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

/// Normalizes `code` against the process-wide standard table.
pub fn normalize(code: &str) -> String {
    STANDARD.normalize(code)
}

/// The table [`normalize`] reads from
pub fn standard_tags() -> &'static PosTagMap {
    &STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(normalize("NOUN"), "noun");
        assert_eq!(normalize("PROPN"), "proper_noun");
        assert_eq!(normalize("ADJ"), "adjective");
        assert_eq!(normalize("CCONJ"), "coord_conjunction");
    }

    #[test]
    fn test_unknown_code_falls_back_to_lowercase() {
        assert_eq!(normalize("ZZZ"), "zzz");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "noun" is not a code, so it falls back to itself
        assert_eq!(normalize("noun"), "noun");
        assert_eq!(normalize("Adj"), "adj");
    }

    #[test]
    fn test_labels_are_sorted_without_space() {
        let labels = standard_tags().labels();
        assert!(!labels.contains(&"space"));
        assert_eq!(labels.len(), 18);
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }
}
