use dioxus::prelude::*;

use crate::components::{SectionHeading, WorkflowStep};
use crate::i18n::use_bundle;

#[component]
pub fn Workflow() -> Element {
    let text = &use_bundle().workflow;
    let last = text.steps.len().saturating_sub(1);

    rsx! {
        section { id: "workflow", class: "section",
            div { class: "section__inner",
                SectionHeading {
                    badge: text.badge.clone(),
                    title: text.title.clone(),
                    subtitle: text.subtitle.clone(),
                }
                div { class: "workflow",
                    for (i, step) in text.steps.iter().enumerate() {
                        WorkflowStep {
                            key: "{i}",
                            number: i + 1,
                            title: step.title.clone(),
                            description: step.desc.clone(),
                            is_last: i == last,
                        }
                    }
                }
            }
        }
    }
}
