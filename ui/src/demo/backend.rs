//! Where a simulated report comes from.

use futures::future::{FutureExt, LocalBoxFuture};

use api::TextGenerationClient;

use super::{DiagnosisResult, Severity, SimulationError, ValidatedInput};
use crate::core::format;
use crate::i18n::{self, Language};
use crate::t;

/// Illustrative confidence by number of supplied fields.
const CONFIDENCE_BY_PROVIDED: [f64; 5] = [71.2, 78.5, 84.9, 90.3, 94.7];

/// Produces a report for already-validated input.
pub trait DiagnosisBackend {
    fn diagnose<'a>(
        &'a self,
        input: &'a ValidatedInput,
        lang: Language,
    ) -> LocalBoxFuture<'a, Result<DiagnosisResult, SimulationError>>;
}

/// Deterministic report built from which fields are present, never from their values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateBackend;

impl TemplateBackend {
    pub fn render(input: &ValidatedInput, lang: Language) -> DiagnosisResult {
        let loader = i18n::loader(lang);
        let provided = input.provided();
        let severity = Severity::from_provided(provided);

        let diagnosis_label = match input.imaging.as_deref() {
            Some(imaging) => t!(loader, "report-impression-imaging", imaging = imaging),
            None => t!(loader, "report-impression-default"),
        };

        let mut recommendations = vec![t!(loader, "report-rec-monitoring")];
        if input.has_labs() {
            recommendations.push(t!(loader, "report-rec-fluids"));
        }
        recommendations.push(match severity {
            Severity::Mild => t!(loader, "report-rec-outpatient"),
            Severity::Moderate => t!(loader, "report-rec-imaging-followup"),
            Severity::Severe => t!(loader, "report-rec-icu"),
        });

        let confidence = CONFIDENCE_BY_PROVIDED[provided.min(CONFIDENCE_BY_PROVIDED.len() - 1)];

        DiagnosisResult {
            diagnosis_label,
            severity,
            confidence: format::format_percent(confidence),
            recommendations,
        }
    }
}

impl DiagnosisBackend for TemplateBackend {
    fn diagnose<'a>(
        &'a self,
        input: &'a ValidatedInput,
        lang: Language,
    ) -> LocalBoxFuture<'a, Result<DiagnosisResult, SimulationError>> {
        futures::future::ready(Ok(Self::render(input, lang))).boxed_local()
    }
}

/// Hands the impression to the text-generation service; grading stays templated.
#[derive(Debug, Clone, Default)]
pub struct AssistantBackend {
    client: TextGenerationClient,
}

impl AssistantBackend {
    pub fn new(client: TextGenerationClient) -> Self {
        Self { client }
    }

    fn prompt(input: &ValidatedInput, lang: Language) -> String {
        let fields = serde_json::json!({
            "imaging": input.imaging,
            "crpMgL": input.crp,
            "whiteCellCount": input.white_cell_count,
            "painLevel": input.pain_level,
        });
        format!(
            "Write a one-sentence clinical impression (language: {}) for this simulated pancreatitis case: {fields}",
            lang.code()
        )
    }
}

impl DiagnosisBackend for AssistantBackend {
    fn diagnose<'a>(
        &'a self,
        input: &'a ValidatedInput,
        lang: Language,
    ) -> LocalBoxFuture<'a, Result<DiagnosisResult, SimulationError>> {
        async move {
            let generated = self.client.generate(&Self::prompt(input, lang)).await?;
            let mut result = TemplateBackend::render(input, lang);
            result.diagnosis_label = generated.text;
            Ok(result)
        }
        .boxed_local()
    }
}
