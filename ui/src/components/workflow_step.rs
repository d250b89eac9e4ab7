use dioxus::prelude::*;

#[component]
pub fn WorkflowStep(
    number: usize,
    title: String,
    description: String,
    #[props(default)] is_last: bool,
) -> Element {
    rsx! {
        div { class: "workflow-step",
            div { class: "workflow-step__number", "{number}" }
            if !is_last {
                div { class: "workflow-step__connector", aria_hidden: "true" }
            }
            h4 { class: "workflow-step__title", "{title}" }
            p { class: "workflow-step__desc", "{description}" }
        }
    }
}
