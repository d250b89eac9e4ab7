//! Simulation engine: validation, the single in-flight slot and the artificial delay.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use api::TextGenerationError;

use super::backend::DiagnosisBackend;
use super::{DiagnosisInput, DiagnosisResult, ValidationError};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("a simulation is already in progress")]
    Busy,
    #[error("simulation failed: {0}")]
    Failure(#[from] TextGenerationError),
}

pub struct Simulator<B> {
    backend: B,
    delay_ms: u64,
    in_flight: AtomicBool,
    next_request: AtomicU64,
}

/// Holds the in-flight slot; releasing it on drop covers early returns and dropped futures.
struct InFlight<'a> {
    slot: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.slot.store(false, Ordering::Release);
    }
}

impl<B: DiagnosisBackend> Simulator<B> {
    pub fn new(backend: B, delay_ms: u64) -> Self {
        Self {
            backend,
            delay_ms,
            in_flight: AtomicBool::new(false),
            next_request: AtomicU64::new(1),
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one simulation. At most one may be outstanding; a second call fails with `Busy`.
    pub async fn simulate(
        &self,
        input: &DiagnosisInput,
        lang: Language,
    ) -> Result<DiagnosisResult, SimulationError> {
        let validated = input.validate()?;
        let _slot = self.acquire()?;
        let request = self.next_request.fetch_add(1, Ordering::Relaxed);

        tracing::info!(request, language = %lang, provided = validated.provided(), "simulation started");
        api::timing::sleep_ms(self.delay_ms).await;

        match self.backend.diagnose(&validated, lang).await {
            Ok(result) => {
                tracing::debug!(request, severity = ?result.severity, "simulation finished");
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(request, %err, "simulation failed");
                Err(err)
            }
        }
    }

    fn acquire(&self) -> Result<InFlight<'_>, SimulationError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SimulationError::Busy)?;
        Ok(InFlight {
            slot: &self.in_flight,
        })
    }
}
