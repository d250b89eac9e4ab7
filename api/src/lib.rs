//! Text-generation seam for PancreaScan-AI.
//!
//! The landing page can hand its diagnosis prompt to an external
//! text-generation service. No request ever leaves the process: the client
//! below answers with a simulated completion after a configurable latency,
//! and only checks that a credential has been configured.

pub mod config;
pub mod error;
pub mod text_generation;
pub mod timing;

pub use config::TextGenerationConfig;
pub use error::TextGenerationError;
pub use text_generation::{GeneratedText, TextGenerationClient};
