use dioxus::prelude::*;

use crate::i18n::use_bundle;

#[component]
pub fn Hero() -> Element {
    let bundle = use_bundle();
    let text = &bundle.hero;
    let stats = [
        ("94.7%", &bundle.stats.accuracy),
        ("30s", &bundle.stats.processing),
        ("150+", &bundle.stats.sites),
        ("25+", &bundle.stats.patents),
    ];

    rsx! {
        section { class: "section hero",
            div { class: "section__inner",
                div { class: "hero__copy",
                    span { class: "badge hero__badge", "⚡ {text.badge}" }
                    h1 { class: "hero__title",
                        "{text.title_part1}"
                        span { class: "hero__tm", "™" }
                        br {}
                        span { class: "hero__title-sub", "{text.title_part2}" }
                    }
                    p { class: "hero__subtitle", "{text.subtitle}" }
                    div { class: "hero__actions",
                        a { class: "button button--primary button--large", href: "#demo", "{text.apply} →" }
                        a { class: "button button--ghost button--large", href: "#clinical", "{text.whitepaper}" }
                    }
                }

                div { class: "hero__stats",
                    for (value, label) in stats {
                        div { key: "{label}", class: "stat",
                            div { class: "stat__value", "{value}" }
                            div { class: "stat__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
