//! Interactive diagnosis simulation: form, stub engine and report panel.

mod backend;
mod config;
mod engine;
mod form;
mod input;
mod report;
mod state;
mod view;

pub use backend::{AssistantBackend, DiagnosisBackend, TemplateBackend};
pub use config::{BackendKind, ConfiguredBackend, DemoConfig};
pub use engine::{SimulationError, Simulator};
pub use form::{DiagnosisForm, FormField, FormFieldId};
pub use input::{DiagnosisInput, LabField, ValidatedInput, ValidationError};
pub use report::{DiagnosisResult, Severity};
pub use state::{notice_text, DemoState, RunStatus};
pub use view::DemoView;
