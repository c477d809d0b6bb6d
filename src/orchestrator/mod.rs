//! Orchestrator Module
//!
//! Coordinates the part-of-speech and figure-of-speech steps of an analysis.

mod analyzer;

pub use analyzer::{Analyzer, FIGURE_API_FAILURE, FIGURE_EMPTY_RESPONSE, POS_FAILURE};
