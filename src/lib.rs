//! Text Annotator
//!
//! A small web backend that annotates a passage with:
//! - figures of speech (metaphors, similes) from a remote generative model
//! - part-of-speech tags from an NLP tagging pipeline

pub mod annotation;
pub mod config;
pub mod figures;
pub mod nlp;
pub mod orchestrator;
pub mod server;
pub mod utils;

// Re-exports for convenience
pub use annotation::{AnalysisResult, Annotation, FigureKind};
pub use config::AppConfig;
pub use orchestrator::Analyzer;
pub use server::AppState;
