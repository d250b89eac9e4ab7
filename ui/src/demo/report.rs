//! The simulated diagnostic report.

use serde::{Deserialize, Serialize};

use crate::i18n::DemoText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Grade from the number of supplied input fields (0..=4).
    pub fn from_provided(provided: usize) -> Self {
        match provided {
            0 | 1 => Severity::Mild,
            2 | 3 => Severity::Moderate,
            _ => Severity::Severe,
        }
    }

    pub fn label(self, text: &DemoText) -> &str {
        match self {
            Severity::Mild => &text.severity_mild,
            Severity::Moderate => &text.severity_moderate,
            Severity::Severe => &text.severity_severe,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Mild => "report__severity--mild",
            Severity::Moderate => "report__severity--moderate",
            Severity::Severe => "report__severity--severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub diagnosis_label: String,
    pub severity: Severity,
    pub confidence: String,
    pub recommendations: Vec<String>,
}
