//! The demo section: input form, run button, report panel and failure notice.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::{
    ConfiguredBackend, DemoConfig, DemoState, DiagnosisForm, DiagnosisResult, FormFieldId,
    Simulator,
};
use crate::i18n::{use_bundle, use_language, DemoText, Language};

#[derive(Debug, Clone)]
enum DemoEvent {
    Run { lang: Language },
    Dismiss,
}

#[component]
pub fn DemoView() -> Element {
    let lang = use_language();
    let text = &use_bundle().demo;

    let mut form = use_signal(|| DiagnosisForm::with_defaults(*lang.peek()));
    let state = use_signal(DemoState::default);
    let simulator: Rc<Simulator<ConfiguredBackend>> =
        use_hook(|| Rc::new(DemoConfig::from_env().build_simulator()));

    // Re-localize untouched fields whenever the page language changes.
    use_effect(move || {
        let current = lang();
        form.with_mut(|f| f.switch_language(current));
    });

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<DemoEvent>| {
        let simulator = simulator.clone();
        let mut state = state;
        async move {
            while let Some(event) = rx.next().await {
                match event {
                    DemoEvent::Run { lang } => {
                        if !state.with_mut(|s| s.begin()) {
                            continue;
                        }
                        let input = form.peek().to_input();
                        let outcome = simulator.simulate(&input, lang).await;
                        state.with_mut(|s| s.settle(outcome, lang));
                    }
                    DemoEvent::Dismiss => state.with_mut(|s| s.dismiss_notice()),
                }
            }
        }
    });

    let run = coroutine.clone();
    let dismiss = coroutine.clone();

    let snapshot = state();
    let fields = form();
    let running = snapshot.is_running();
    let report = match snapshot.result.as_ref() {
        Some(result) => render_report(result, text),
        None => rsx! {
            div { class: "report__placeholder",
                p { "{text.placeholder}" }
            }
        },
    };

    rsx! {
        section { id: "demo", class: "section section--demo",
            div { class: "section__inner demo",
                div { class: "demo__intro",
                    h2 { class: "demo__title", "{text.title}" }
                    p { class: "demo__subtitle", "{text.subtitle}" }

                    div { class: "demo__form",
                        label { class: "demo__label", r#for: "demo-imaging", "{text.label_imaging}" }
                        textarea {
                            id: "demo-imaging",
                            class: "demo__input demo__input--text",
                            rows: "3",
                            value: "{fields.imaging.value}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.edit(FormFieldId::Imaging, evt.value())),
                        }

                        div { class: "demo__labs",
                            {lab_input("demo-crp", &text.label_crp, &fields.crp.value, FormFieldId::Crp, form)}
                            {lab_input("demo-wbc", &text.label_wbc, &fields.white_cell_count.value, FormFieldId::WhiteCellCount, form)}
                            {lab_input("demo-pain", &text.label_pain, &fields.pain_level.value, FormFieldId::PainLevel, form)}
                        }

                        button {
                            r#type: "button",
                            class: "button button--light demo__execute",
                            disabled: running,
                            onclick: move |_| run.send(DemoEvent::Run { lang: lang() }),
                            if running {
                                span { class: "demo__spinner", aria_hidden: "true" }
                                span { "{text.btn_loading}" }
                            } else {
                                span { "{text.btn_execute}" }
                            }
                        }
                    }
                }

                div { class: "report", {report} }
            }

            if let Some(message) = snapshot.notice.clone() {
                div { class: "notice", role: "alertdialog", aria_modal: "true",
                    div { class: "notice__body",
                        p { class: "notice__message", "⚠️ {message}" }
                        button {
                            r#type: "button",
                            class: "button button--primary notice__dismiss",
                            onclick: move |_| dismiss.send(DemoEvent::Dismiss),
                            "{text.notice_dismiss}"
                        }
                    }
                }
            }
        }
    }
}

fn lab_input(
    id: &'static str,
    caption: &str,
    value: &str,
    field: FormFieldId,
    mut form: Signal<DiagnosisForm>,
) -> Element {
    rsx! {
        div { class: "demo__lab",
            label { class: "demo__label", r#for: "{id}", "{caption}" }
            input {
                id: "{id}",
                r#type: "text",
                class: "demo__input",
                value: "{value}",
                oninput: move |evt: FormEvent| form.with_mut(|f| f.edit(field, evt.value())),
            }
        }
    }
}

fn render_report(result: &DiagnosisResult, text: &DemoText) -> Element {
    let severity_label = result.severity.label(text).to_string();
    let severity_class = result.severity.css_class();

    rsx! {
        div { class: "report__content",
            div { class: "report__header",
                div {
                    span { class: "badge", "{text.badge_output}" }
                    h3 { class: "report__title", "{text.report_title}" }
                }
                div { class: "report__confidence",
                    strong { "{result.confidence}" }
                    span { "{text.confidence}" }
                }
            }

            div { class: "report__block",
                span { class: "report__caption", "{text.impression}" }
                p { class: "report__impression", "{result.diagnosis_label}" }
            }

            div { class: "report__block",
                span { class: "report__caption", "{text.severity}" }
                p { class: "report__severity {severity_class}", "{severity_label}" }
            }

            div { class: "report__actions",
                span { class: "report__caption", "{text.actions}" }
                ul {
                    for (i, rec) in result.recommendations.iter().enumerate() {
                        li { key: "{i}", class: "report__action", "{rec}" }
                    }
                }
            }
        }
    }
}
