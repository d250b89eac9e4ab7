//! Runtime configuration for the simulation panel.
//!
//! Resolved once when the panel mounts.

use futures::future::LocalBoxFuture;

use api::config::env_var;
use api::{TextGenerationClient, TextGenerationConfig};

use super::backend::{AssistantBackend, DiagnosisBackend, TemplateBackend};
use super::{DiagnosisResult, SimulationError, Simulator, ValidatedInput};
use crate::i18n::Language;

pub const DELAY_VAR: &str = "PANCREASCAN_SIMULATION_DELAY_MS";
pub const BACKEND_VAR: &str = "PANCREASCAN_SIMULATION_BACKEND";

pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Template,
    Assistant,
}

impl BackendKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "template" => Some(BackendKind::Template),
            "assistant" => Some(BackendKind::Assistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub delay_ms: u64,
    pub backend: BackendKind,
    pub text_generation: TextGenerationConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            backend: BackendKind::default(),
            text_generation: TextGenerationConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        // Also loads `.env` on native targets.
        let text_generation = TextGenerationConfig::from_env();

        let delay_ms = parse_delay(env_var(DELAY_VAR));
        let backend = parse_backend(env_var(BACKEND_VAR));

        Self {
            delay_ms,
            backend,
            text_generation,
        }
    }

    pub fn build_simulator(&self) -> Simulator<ConfiguredBackend> {
        let backend = match self.backend {
            BackendKind::Template => ConfiguredBackend::Template(TemplateBackend),
            BackendKind::Assistant => ConfiguredBackend::Assistant(AssistantBackend::new(
                TextGenerationClient::new(self.text_generation.clone()),
            )),
        };
        Simulator::new(backend, self.delay_ms)
    }
}

/// Delay from its raw env value; unset or unparsable falls back to the default.
fn parse_delay(raw: Option<String>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_DELAY_MS;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var = DELAY_VAR, value = %raw, "ignoring unparsable delay");
        DEFAULT_DELAY_MS
    })
}

fn parse_backend(raw: Option<String>) -> BackendKind {
    let Some(raw) = raw else {
        return BackendKind::default();
    };
    BackendKind::parse(&raw).unwrap_or_else(|| {
        tracing::warn!(var = BACKEND_VAR, value = %raw, "unknown backend; using template");
        BackendKind::default()
    })
}

/// Backend chosen by [`DemoConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredBackend {
    Template(TemplateBackend),
    Assistant(AssistantBackend),
}

impl DiagnosisBackend for ConfiguredBackend {
    fn diagnose<'a>(
        &'a self,
        input: &'a ValidatedInput,
        lang: Language,
    ) -> LocalBoxFuture<'a, Result<DiagnosisResult, SimulationError>> {
        match self {
            ConfiguredBackend::Template(backend) => backend.diagnose(input, lang),
            ConfiguredBackend::Assistant(backend) => backend.diagnose(input, lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse() {
        assert_eq!(BackendKind::parse("Template"), Some(BackendKind::Template));
        assert_eq!(BackendKind::parse(" assistant "), Some(BackendKind::Assistant));
        assert_eq!(BackendKind::parse("gpt"), None);
    }

    #[test]
    fn delay_falls_back_when_unset_or_garbage() {
        assert_eq!(parse_delay(None), DEFAULT_DELAY_MS);
        assert_eq!(parse_delay(Some("soon".into())), DEFAULT_DELAY_MS);
        assert_eq!(parse_delay(Some("-5".into())), DEFAULT_DELAY_MS);
        assert_eq!(parse_delay(Some(" 1200 ".into())), 1200);
        assert_eq!(parse_delay(Some("0".into())), 0);
    }

    #[test]
    fn unknown_backend_falls_back_to_template() {
        assert_eq!(parse_backend(None), BackendKind::Template);
        assert_eq!(parse_backend(Some("gpt".into())), BackendKind::Template);
        assert_eq!(parse_backend(Some("ASSISTANT".into())), BackendKind::Assistant);
    }

    #[test]
    fn default_config_uses_template_backend() {
        let config = DemoConfig::default();
        assert_eq!(config.backend, BackendKind::Template);
        let simulator = config.build_simulator();
        assert_eq!(simulator.delay_ms(), DEFAULT_DELAY_MS);
    }

    #[tokio::test(start_paused = true)]
    async fn assistant_backend_without_key_surfaces_failure() {
        let config = DemoConfig {
            backend: BackendKind::Assistant,
            ..DemoConfig::default()
        };
        let err = config
            .build_simulator()
            .simulate(&Default::default(), Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, SimulationError::Failure(_)));
    }
}
