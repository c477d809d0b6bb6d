//! Figures Module
//!
//! Metaphor and simile detection through a remote generative model with
//! schema-constrained JSON output, and validation of what comes back.

pub mod gemini;
mod prompt;
mod provider;
mod validator;

pub use gemini::GeminiClient;
pub use prompt::{build_prompt, response_schema};
pub use provider::{Generation, GenerationSettings, GenerativeModel, LlmError};
pub use validator::{validate, FigureValidation, PayloadError};
