use dioxus::prelude::*;

use crate::i18n::use_bundle;

#[component]
pub fn Footer() -> Element {
    let bundle = use_bundle();
    let text = &bundle.footer;
    let features = &bundle.features;

    rsx! {
        footer { id: "footer", class: "footer",
            div { class: "footer__inner",
                div { class: "footer__grid",
                    div { class: "footer__brand",
                        span { class: "footer__brand-name", "PancreaScan-AI" }
                        p { class: "footer__desc", "{text.desc}" }
                        div { class: "footer__contact",
                            a { class: "footer__contact-link", href: "mailto:contact@pancreascan.ai", aria_label: "Email", "✉" }
                            a { class: "footer__contact-link", href: "tel:+10000000000", aria_label: "Phone", "☎" }
                        }
                    }
                    div { class: "footer__column",
                        h4 { "{text.technology}" }
                        ul {
                            li { a { href: "#features", "{features.neural.title}" } }
                            li { a { href: "#features", "{features.grading.title}" } }
                            li { a { href: "#", "{text.api_integration}" } }
                        }
                    }
                    div { class: "footer__column",
                        h4 { "{text.company}" }
                        ul {
                            li { a { href: "#", "{text.about}" } }
                            li { a { href: "#", "{text.partners}" } }
                        }
                    }
                    div { class: "footer__trial",
                        h4 { "{text.trial}" }
                        p { "{text.trial_desc}" }
                        button { r#type: "button", class: "button button--primary", "{text.get_started}" }
                    }
                }
                div { class: "footer__bottom",
                    p { "{text.copy}" }
                    div { class: "footer__legal",
                        a { href: "#", "{text.privacy}" }
                        a { href: "#", "{text.terms}" }
                    }
                }
            }
        }
    }
}
