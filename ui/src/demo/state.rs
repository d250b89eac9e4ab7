//! Panel state: run status, the latest report and the single pending notice.

use super::{DiagnosisResult, LabField, SimulationError, ValidationError};
use crate::core::format;
use crate::i18n::{self, Language};
use crate::t;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    pub status: RunStatus,
    pub result: Option<DiagnosisResult>,
    pub notice: Option<String>,
}

impl DemoState {
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Mark a run as started. Returns `false` (and changes nothing) while one is running.
    pub fn begin(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.status = RunStatus::Running;
        true
    }

    /// Apply the outcome of a run.
    ///
    /// Success replaces the report. Failure keeps the previous report and
    /// shows one notice, replacing any earlier one.
    pub fn settle(&mut self, outcome: Result<DiagnosisResult, SimulationError>, lang: Language) {
        self.status = RunStatus::Idle;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.notice = None;
            }
            Err(err) => {
                tracing::warn!(%err, "simulation surfaced to user");
                self.notice = Some(notice_text(&err, lang));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Localized, user-facing message for a failed run.
pub fn notice_text(err: &SimulationError, lang: Language) -> String {
    let text = &i18n::bundle(lang).demo;
    match err {
        SimulationError::Failure(_) => text.error_failed.clone(),
        SimulationError::Busy => text.error_busy.clone(),
        SimulationError::Validation(validation) => {
            let loader = i18n::loader(lang);
            let field = field_label(validation.field(), lang);
            match validation {
                ValidationError::NotANumber { raw, .. } => t!(
                    loader,
                    "demo-error-not-number",
                    field = field,
                    value = raw.as_str()
                ),
                ValidationError::OutOfRange { min, max, .. } => t!(
                    loader,
                    "demo-error-out-of-range",
                    field = field,
                    min = format::format_number(*min),
                    max = format::format_number(*max)
                ),
            }
        }
    }
}

fn field_label(field: LabField, lang: Language) -> &'static str {
    let text = &i18n::bundle(lang).demo;
    match field {
        LabField::Crp => &text.label_crp,
        LabField::WhiteCellCount => &text.label_wbc,
        LabField::PainLevel => &text.label_pain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::Severity;
    use api::TextGenerationError;

    fn report(label: &str) -> DiagnosisResult {
        DiagnosisResult {
            diagnosis_label: label.into(),
            severity: Severity::Moderate,
            confidence: "84.9%".into(),
            recommendations: vec!["monitor".into()],
        }
    }

    #[test]
    fn begin_refuses_while_running() {
        let mut state = DemoState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_running());
    }

    #[test]
    fn success_replaces_the_report() {
        let mut state = DemoState::default();
        state.begin();
        state.settle(Ok(report("first")), Language::En);
        state.begin();
        state.settle(Ok(report("second")), Language::En);
        assert_eq!(state.result, Some(report("second")));
        assert_eq!(state.status, RunStatus::Idle);
    }

    #[test]
    fn transport_failure_keeps_report_and_shows_one_notice() {
        let mut state = DemoState::default();
        state.begin();
        state.settle(Ok(report("kept")), Language::En);

        state.begin();
        state.settle(
            Err(SimulationError::Failure(TextGenerationError::Transport("reset".into()))),
            Language::En,
        );

        assert_eq!(state.status, RunStatus::Idle);
        assert_eq!(state.result, Some(report("kept")));
        assert_eq!(
            state.notice.as_deref(),
            Some("Simulation failed. Please check your API key.")
        );

        state.dismiss_notice();
        assert_eq!(state.notice, None);
    }

    #[test]
    fn notices_are_localized() {
        let err = SimulationError::Failure(TextGenerationError::Transport("reset".into()));
        assert_eq!(notice_text(&err, Language::Zh), "模拟失败。请检查您的 API 密钥。");
    }

    #[test]
    fn validation_notice_names_the_field() {
        let err = SimulationError::Validation(ValidationError::OutOfRange {
            field: LabField::PainLevel,
            value: 12.0,
            min: 1.0,
            max: 10.0,
        });
        assert_eq!(
            notice_text(&err, Language::En),
            "Pain (1-10) must be between 1 and 10."
        );

        let err = SimulationError::Validation(ValidationError::NotANumber {
            field: LabField::Crp,
            raw: "high".into(),
        });
        assert_eq!(
            notice_text(&err, Language::En),
            "CRP (mg/L): \"high\" is not a number."
        );
    }
}
