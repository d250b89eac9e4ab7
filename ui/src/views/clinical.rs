use dioxus::prelude::*;

use crate::components::{ComparisonChart, SectionHeading};
use crate::i18n::use_bundle;

#[component]
pub fn Clinical() -> Element {
    let text = &use_bundle().clinical;
    let boxes = [
        ("evidence-box--accent", &text.acc_box),
        ("evidence-box--green", &text.early_box),
        ("evidence-box--neutral", &text.icu_box),
    ];

    rsx! {
        section { id: "clinical", class: "section",
            div { class: "section__inner",
                SectionHeading {
                    badge: text.badge.clone(),
                    title: text.title.clone(),
                    subtitle: text.subtitle.clone(),
                }
                div { class: "clinical",
                    div { class: "clinical__chart", ComparisonChart {} }
                    div { class: "clinical__evidence",
                        for (modifier, card) in boxes {
                            div { key: "{modifier}", class: "evidence-box {modifier}",
                                div { class: "evidence-box__title", "{card.title}" }
                                p { class: "evidence-box__desc", "{card.desc}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
