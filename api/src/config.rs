//! Text-generation configuration.
//!
//! Resolved once at startup and handed to [`crate::TextGenerationClient`];
//! nothing reads the environment while a request is being served.

/// Credential for the external text-generation service.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Model name reported back with each completion.
pub const MODEL_VAR: &str = "PANCREASCAN_TEXTGEN_MODEL";
/// Simulated round-trip latency in milliseconds.
pub const LATENCY_VAR: &str = "PANCREASCAN_TEXTGEN_LATENCY_MS";

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_LATENCY_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGenerationConfig {
    api_key: Option<String>,
    model: String,
    latency_ms: u64,
}

impl TextGenerationConfig {
    /// Build a configuration with default model and latency. A blank key counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }

    /// Resolve from the process environment (and `.env` on native targets).
    pub fn from_env() -> Self {
        load_dotenv();

        let latency_ms = parse_latency(env_var(LATENCY_VAR));

        let config = Self::new(env_var(API_KEY_VAR))
            .with_model(env_var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_latency_ms(latency_ms);

        tracing::debug!(
            credential = config.has_credential(),
            model = %config.model,
            latency_ms = config.latency_ms,
            "text-generation config resolved"
        );
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn latency_ms(&self) -> u64 {
        self.latency_ms
    }
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Read a non-blank environment variable.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Latency from its raw env value; unset or unparsable falls back to the default.
fn parse_latency(raw: Option<String>) -> u64 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = LATENCY_VAR, value = %raw, "ignoring unparsable latency");
            DEFAULT_LATENCY_MS
        }),
        None => DEFAULT_LATENCY_MS,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_absent() {
        let config = TextGenerationConfig::new(Some("   ".into()));
        assert!(!config.has_credential());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn defaults_match_constants() {
        let config = TextGenerationConfig::default();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.latency_ms(), DEFAULT_LATENCY_MS);
    }

    #[test]
    fn latency_falls_back_when_unset_or_garbage() {
        assert_eq!(parse_latency(None), DEFAULT_LATENCY_MS);
        assert_eq!(parse_latency(Some("fast".into())), DEFAULT_LATENCY_MS);
        assert_eq!(parse_latency(Some("2.5".into())), DEFAULT_LATENCY_MS);
        assert_eq!(parse_latency(Some(" 50 ".into())), 50);
    }

    #[test]
    fn builder_overrides() {
        let config = TextGenerationConfig::new(Some("key-123".into()))
            .with_model("local-echo")
            .with_latency_ms(0);
        assert_eq!(config.api_key(), Some("key-123"));
        assert_eq!(config.model(), "local-echo");
        assert_eq!(config.latency_ms(), 0);
    }
}
