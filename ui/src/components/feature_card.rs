use dioxus::prelude::*;

#[component]
pub fn FeatureCard(icon: &'static str, title: String, description: String) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-card__icon", aria_hidden: "true", "{icon}" }
            h3 { class: "feature-card__title", "{title}" }
            p { class: "feature-card__desc", "{description}" }
        }
    }
}
