use dioxus::prelude::*;

#[component]
pub fn SectionHeading(title: String, badge: Option<String>, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-heading",
            if let Some(badge) = badge {
                span { class: "badge section-heading__badge", "{badge}" }
            }
            h2 { class: "section-heading__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-heading__subtitle", "{subtitle}" }
            }
        }
    }
}
