//! Typed view over one language's messages.
//!
//! Every field is resolved through `t!`, so a message id missing from the
//! fallback locale is a compile error, and the record has the same shape for
//! every language by construction.

use i18n_embed::fluent::FluentLanguageLoader;

use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedBundle {
    pub nav: NavText,
    pub hero: HeroText,
    pub stats: StatsText,
    pub challenges: ChallengesText,
    pub features: FeaturesText,
    pub workflow: WorkflowText,
    pub demo: DemoText,
    pub clinical: ClinicalText,
    pub footer: FooterText,
}

/// Title + description pair shared by cards, workflow steps and evidence boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavText {
    pub features: String,
    pub workflow: String,
    pub clinical: String,
    pub demo: String,
    pub request: String,
    pub language_toggle: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroText {
    pub badge: String,
    pub title_part1: String,
    pub title_part2: String,
    pub subtitle: String,
    pub apply: String,
    pub whitepaper: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsText {
    pub accuracy: String,
    pub processing: String,
    pub sites: String,
    pub patents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengesText {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesText {
    pub neural: CardText,
    pub grading: CardText,
    pub prognosis: CardText,
    pub reports: CardText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowText {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<CardText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoText {
    pub title: String,
    pub subtitle: String,
    pub label_imaging: String,
    pub label_crp: String,
    pub label_wbc: String,
    pub label_pain: String,
    /// Pre-filled imaging description for a fresh form.
    pub default_imaging: String,
    pub btn_execute: String,
    pub btn_loading: String,
    pub report_title: String,
    pub badge_output: String,
    pub confidence: String,
    pub impression: String,
    pub severity: String,
    pub actions: String,
    pub placeholder: String,
    pub severity_mild: String,
    pub severity_moderate: String,
    pub severity_severe: String,
    pub notice_dismiss: String,
    pub error_failed: String,
    pub error_busy: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalText {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub chart_acc: String,
    pub chart_sens: String,
    pub chart_spec: String,
    pub row_traditional: String,
    pub row_product: String,
    pub acc_box: CardText,
    pub early_box: CardText,
    pub icu_box: CardText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterText {
    pub desc: String,
    pub technology: String,
    pub api_integration: String,
    pub company: String,
    pub about: String,
    pub partners: String,
    pub trial: String,
    pub trial_desc: String,
    pub get_started: String,
    pub copy: String,
    pub privacy: String,
    pub terms: String,
}

impl LocalizedBundle {
    pub(crate) fn resolve(loader: &FluentLanguageLoader) -> Self {
        Self {
            nav: NavText {
                features: t!(loader, "nav-features"),
                workflow: t!(loader, "nav-workflow"),
                clinical: t!(loader, "nav-clinical"),
                demo: t!(loader, "nav-demo"),
                request: t!(loader, "nav-request"),
                language_toggle: t!(loader, "nav-language-toggle"),
                language_label: t!(loader, "nav-language-label"),
            },
            hero: HeroText {
                badge: t!(loader, "hero-badge"),
                title_part1: t!(loader, "hero-title-part1"),
                title_part2: t!(loader, "hero-title-part2"),
                subtitle: t!(loader, "hero-subtitle"),
                apply: t!(loader, "hero-apply"),
                whitepaper: t!(loader, "hero-whitepaper"),
            },
            stats: StatsText {
                accuracy: t!(loader, "stats-accuracy"),
                processing: t!(loader, "stats-processing"),
                sites: t!(loader, "stats-sites"),
                patents: t!(loader, "stats-patents"),
            },
            challenges: ChallengesText {
                title: t!(loader, "challenges-title"),
                items: vec![
                    t!(loader, "challenges-item-1"),
                    t!(loader, "challenges-item-2"),
                    t!(loader, "challenges-item-3"),
                    t!(loader, "challenges-item-4"),
                ],
            },
            features: FeaturesText {
                neural: card(t!(loader, "features-neural-title"), t!(loader, "features-neural-desc")),
                grading: card(t!(loader, "features-grading-title"), t!(loader, "features-grading-desc")),
                prognosis: card(
                    t!(loader, "features-prognosis-title"),
                    t!(loader, "features-prognosis-desc"),
                ),
                reports: card(t!(loader, "features-reports-title"), t!(loader, "features-reports-desc")),
            },
            workflow: WorkflowText {
                badge: t!(loader, "workflow-badge"),
                title: t!(loader, "workflow-title"),
                subtitle: t!(loader, "workflow-subtitle"),
                steps: vec![
                    card(t!(loader, "workflow-step-1-title"), t!(loader, "workflow-step-1-desc")),
                    card(t!(loader, "workflow-step-2-title"), t!(loader, "workflow-step-2-desc")),
                    card(t!(loader, "workflow-step-3-title"), t!(loader, "workflow-step-3-desc")),
                    card(t!(loader, "workflow-step-4-title"), t!(loader, "workflow-step-4-desc")),
                ],
            },
            demo: DemoText {
                title: t!(loader, "demo-title"),
                subtitle: t!(loader, "demo-subtitle"),
                label_imaging: t!(loader, "demo-label-imaging"),
                label_crp: t!(loader, "demo-label-crp"),
                label_wbc: t!(loader, "demo-label-wbc"),
                label_pain: t!(loader, "demo-label-pain"),
                default_imaging: t!(loader, "demo-default-imaging"),
                btn_execute: t!(loader, "demo-btn-execute"),
                btn_loading: t!(loader, "demo-btn-loading"),
                report_title: t!(loader, "demo-report-title"),
                badge_output: t!(loader, "demo-badge-output"),
                confidence: t!(loader, "demo-confidence"),
                impression: t!(loader, "demo-impression"),
                severity: t!(loader, "demo-severity"),
                actions: t!(loader, "demo-actions"),
                placeholder: t!(loader, "demo-placeholder"),
                severity_mild: t!(loader, "demo-severity-mild"),
                severity_moderate: t!(loader, "demo-severity-moderate"),
                severity_severe: t!(loader, "demo-severity-severe"),
                notice_dismiss: t!(loader, "demo-notice-dismiss"),
                error_failed: t!(loader, "demo-error-failed"),
                error_busy: t!(loader, "demo-error-busy"),
            },
            clinical: ClinicalText {
                badge: t!(loader, "clinical-badge"),
                title: t!(loader, "clinical-title"),
                subtitle: t!(loader, "clinical-subtitle"),
                chart_acc: t!(loader, "clinical-chart-acc"),
                chart_sens: t!(loader, "clinical-chart-sens"),
                chart_spec: t!(loader, "clinical-chart-spec"),
                row_traditional: t!(loader, "clinical-row-traditional"),
                row_product: t!(loader, "clinical-row-product"),
                acc_box: card(t!(loader, "clinical-acc-title"), t!(loader, "clinical-acc-desc")),
                early_box: card(t!(loader, "clinical-early-title"), t!(loader, "clinical-early-desc")),
                icu_box: card(t!(loader, "clinical-icu-title"), t!(loader, "clinical-icu-desc")),
            },
            footer: FooterText {
                desc: t!(loader, "footer-desc"),
                technology: t!(loader, "footer-technology"),
                api_integration: t!(loader, "footer-api-integration"),
                company: t!(loader, "footer-company"),
                about: t!(loader, "footer-about"),
                partners: t!(loader, "footer-partners"),
                trial: t!(loader, "footer-trial"),
                trial_desc: t!(loader, "footer-trial-desc"),
                get_started: t!(loader, "footer-get-started"),
                copy: t!(loader, "footer-copy"),
                privacy: t!(loader, "footer-privacy"),
                terms: t!(loader, "footer-terms"),
            },
        }
    }
}

fn card(title: String, desc: String) -> CardText {
    CardText { title, desc }
}
