//! Editable form state with per-field dirty tracking.
//!
//! A field the user never touched follows the page language; once edited it
//! keeps its value across language switches.

use super::DiagnosisInput;
use crate::i18n::{self, Language};

pub const DEFAULT_CRP: &str = "150";
pub const DEFAULT_WHITE_CELL_COUNT: &str = "18";
pub const DEFAULT_PAIN_LEVEL: &str = "8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldId {
    Imaging,
    Crp,
    WhiteCellCount,
    PainLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub dirty: bool,
}

impl FormField {
    fn pristine(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisForm {
    pub imaging: FormField,
    pub crp: FormField,
    pub white_cell_count: FormField,
    pub pain_level: FormField,
}

impl DiagnosisForm {
    pub fn with_defaults(lang: Language) -> Self {
        Self {
            imaging: FormField::pristine(default_value(FormFieldId::Imaging, lang)),
            crp: FormField::pristine(default_value(FormFieldId::Crp, lang)),
            white_cell_count: FormField::pristine(default_value(FormFieldId::WhiteCellCount, lang)),
            pain_level: FormField::pristine(default_value(FormFieldId::PainLevel, lang)),
        }
    }

    pub fn field(&self, id: FormFieldId) -> &FormField {
        match id {
            FormFieldId::Imaging => &self.imaging,
            FormFieldId::Crp => &self.crp,
            FormFieldId::WhiteCellCount => &self.white_cell_count,
            FormFieldId::PainLevel => &self.pain_level,
        }
    }

    fn field_mut(&mut self, id: FormFieldId) -> &mut FormField {
        match id {
            FormFieldId::Imaging => &mut self.imaging,
            FormFieldId::Crp => &mut self.crp,
            FormFieldId::WhiteCellCount => &mut self.white_cell_count,
            FormFieldId::PainLevel => &mut self.pain_level,
        }
    }

    /// Record a user edit. The field stays dirty even if edited back to its default.
    pub fn edit(&mut self, id: FormFieldId, value: String) {
        let field = self.field_mut(id);
        field.value = value;
        field.dirty = true;
    }

    /// Re-localize every untouched field.
    pub fn switch_language(&mut self, lang: Language) {
        for id in [
            FormFieldId::Imaging,
            FormFieldId::Crp,
            FormFieldId::WhiteCellCount,
            FormFieldId::PainLevel,
        ] {
            let field = self.field_mut(id);
            if !field.dirty {
                field.value = default_value(id, lang);
            }
        }
    }

    pub fn to_input(&self) -> DiagnosisInput {
        DiagnosisInput {
            imaging_text: self.imaging.value.clone(),
            crp: self.crp.value.clone(),
            white_cell_count: self.white_cell_count.value.clone(),
            pain_level: self.pain_level.value.clone(),
        }
    }
}

fn default_value(id: FormFieldId, lang: Language) -> String {
    match id {
        FormFieldId::Imaging => i18n::bundle(lang).demo.default_imaging.clone(),
        FormFieldId::Crp => DEFAULT_CRP.to_string(),
        FormFieldId::WhiteCellCount => DEFAULT_WHITE_CELL_COUNT.to_string(),
        FormFieldId::PainLevel => DEFAULT_PAIN_LEVEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_language() {
        let en = DiagnosisForm::with_defaults(Language::En);
        let zh = DiagnosisForm::with_defaults(Language::Zh);
        assert_eq!(en.imaging.value, "Edematous change, peripancreatic fluid collection noted.");
        assert_eq!(zh.imaging.value, "见水肿样改变，胰周积液明显。");
        assert_eq!(en.crp.value, DEFAULT_CRP);
        assert!(!en.imaging.dirty);
    }

    #[test]
    fn untouched_fields_round_trip_across_two_switches() {
        let original = DiagnosisForm::with_defaults(Language::En);
        let mut form = original.clone();
        form.switch_language(Language::Zh);
        assert_ne!(form.imaging.value, original.imaging.value);
        form.switch_language(Language::En);
        assert_eq!(form, original);
    }

    #[test]
    fn edited_fields_survive_a_switch() {
        let mut form = DiagnosisForm::with_defaults(Language::En);
        form.edit(FormFieldId::Imaging, "necrotic collection".into());
        form.edit(FormFieldId::Crp, "210".into());
        form.switch_language(Language::Zh);

        assert_eq!(form.imaging.value, "necrotic collection");
        assert_eq!(form.crp.value, "210");
        assert_eq!(form.white_cell_count.value, DEFAULT_WHITE_CELL_COUNT);
    }

    #[test]
    fn edit_back_to_default_text_is_still_a_user_value() {
        let mut form = DiagnosisForm::with_defaults(Language::En);
        let english_default = form.imaging.value.clone();
        form.edit(FormFieldId::Imaging, english_default.clone());
        form.switch_language(Language::Zh);
        assert_eq!(form.imaging.value, english_default);
    }

    #[test]
    fn input_mirrors_fields() {
        let mut form = DiagnosisForm::with_defaults(Language::En);
        form.edit(FormFieldId::PainLevel, "".into());
        let input = form.to_input();
        assert_eq!(input.pain_level, "");
        assert_eq!(input.white_cell_count, DEFAULT_WHITE_CELL_COUNT);
        assert_eq!(form.field(FormFieldId::PainLevel).value, "");
    }
}
