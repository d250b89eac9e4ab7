use dioxus::prelude::*;

use crate::components::FeatureCard;
use crate::i18n::use_bundle;

/// Pain points on the left, the four feature cards on the right.
#[component]
pub fn Challenges() -> Element {
    let bundle = use_bundle();
    let challenges = &bundle.challenges;
    let features = &bundle.features;
    let cards = [
        ("🧠", &features.neural),
        ("⚡", &features.grading),
        ("📈", &features.prognosis),
        ("📄", &features.reports),
    ];

    rsx! {
        section { id: "features", class: "section section--muted",
            div { class: "section__inner challenges",
                div { class: "challenges__list",
                    h2 { class: "challenges__title", "{challenges.title}" }
                    ul {
                        for (i, item) in challenges.items.iter().enumerate() {
                            li { key: "{i}", class: "challenges__item",
                                span { class: "challenges__marker", aria_hidden: "true", "›" }
                                "{item}"
                            }
                        }
                    }
                }
                div { class: "challenges__features",
                    for (icon, card) in cards {
                        FeatureCard {
                            key: "{card.title}",
                            icon: icon,
                            title: card.title.clone(),
                            description: card.desc.clone(),
                        }
                    }
                }
            }
        }
    }
}
