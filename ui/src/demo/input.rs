//! Raw form input and its validation boundary.

use serde::{Deserialize, Serialize};

/// Text exactly as typed into the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisInput {
    pub imaging_text: String,
    pub crp: String,
    pub white_cell_count: String,
    pub pain_level: String,
}

/// The numeric lab fields, with their accepted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabField {
    Crp,
    WhiteCellCount,
    PainLevel,
}

impl LabField {
    /// Inclusive accepted range.
    pub fn range(self) -> (f64, f64) {
        match self {
            LabField::Crp => (0.0, 500.0),
            LabField::WhiteCellCount => (0.0, 100.0),
            LabField::PainLevel => (1.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field:?}: {raw:?} is not a number")]
    NotANumber { field: LabField, raw: String },
    #[error("{field:?}: {value} is outside {min}..={max}")]
    OutOfRange {
        field: LabField,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    pub fn field(&self) -> LabField {
        match self {
            ValidationError::NotANumber { field, .. } | ValidationError::OutOfRange { field, .. } => {
                *field
            }
        }
    }
}

/// Input after the boundary check. `None` means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInput {
    pub imaging: Option<String>,
    pub crp: Option<f64>,
    pub white_cell_count: Option<f64>,
    pub pain_level: Option<u8>,
}

impl ValidatedInput {
    /// How many of the four fields were supplied.
    pub fn provided(&self) -> usize {
        [
            self.imaging.is_some(),
            self.crp.is_some(),
            self.white_cell_count.is_some(),
            self.pain_level.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn has_labs(&self) -> bool {
        self.crp.is_some() || self.white_cell_count.is_some() || self.pain_level.is_some()
    }
}

impl DiagnosisInput {
    /// Parse and range-check the lab values. Blank fields are accepted as absent.
    pub fn validate(&self) -> Result<ValidatedInput, ValidationError> {
        let imaging = non_blank(&self.imaging_text).map(str::to_string);
        let crp = parse_lab(LabField::Crp, &self.crp)?;
        let white_cell_count = parse_lab(LabField::WhiteCellCount, &self.white_cell_count)?;
        let pain_level = parse_lab(LabField::PainLevel, &self.pain_level)?
            .map(|value| {
                if value.fract() == 0.0 {
                    Ok(value as u8)
                } else {
                    Err(ValidationError::NotANumber {
                        field: LabField::PainLevel,
                        raw: self.pain_level.trim().to_string(),
                    })
                }
            })
            .transpose()?;

        Ok(ValidatedInput {
            imaging,
            crp,
            white_cell_count,
            pain_level,
        })
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_lab(field: LabField, raw: &str) -> Result<Option<f64>, ValidationError> {
    let Some(trimmed) = non_blank(raw) else {
        return Ok(None);
    };
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            raw: trimmed.to_string(),
        })?;

    let (min, max) = field.range();
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(Some(value))
}
