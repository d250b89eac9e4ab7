/// Failures surfaced by [`crate::TextGenerationClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextGenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("no credential configured for the text-generation service ({var})")]
    MissingCredential { var: &'static str },
    #[error("transport failure: {0}")]
    Transport(String),
}

pub type TextGenerationResult<T> = Result<T, TextGenerationError>;
