//! Annotation Module
//!
//! Shared data model for both annotation streams.

mod types;

pub use types::{AnalysisResult, Annotation, FigureKind};
