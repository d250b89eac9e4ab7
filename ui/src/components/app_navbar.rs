use crate::i18n::{use_bundle, use_language, NavText};
use dioxus::prelude::*;

// Navbar stylesheet (linked on web/debug, inlined for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// In-page anchors, in display order.
const SECTION_ANCHORS: [&str; 4] = ["#features", "#workflow", "#demo", "#clinical"];

/// Link captions, paired index-for-index with [`SECTION_ANCHORS`].
fn section_labels(text: &NavText) -> [&str; 4] {
    [&text.features, &text.workflow, &text.demo, &text.clinical]
}

/// Fixed top bar: brand, section anchors, language toggle and the demo request button.
///
/// The toggle flips the `Signal<Language>` context provided by the platform
/// root; every view reading [`use_bundle`] re-renders with the other bundle.
#[component]
pub fn AppNavbar() -> Element {
    let mut lang = use_language();
    let text = &use_bundle().nav;

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = %lang(), "AppNavbar render");
    }

    let labels = section_labels(text);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                a { class: "navbar__brand", href: "#top",
                    span { class: "navbar__brand-mark", aria_hidden: "true" }
                    span { class: "navbar__brand-name", "PancreaScan-AI" }
                    span { class: "navbar__brand-tm", "™" }
                }

                nav { class: "navbar__links",
                    for (anchor, label) in SECTION_ANCHORS.iter().zip(labels) {
                        a { key: "{anchor}", class: "navbar__link", href: "{anchor}", "{label}" }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        aria_label: "{text.language_label}",
                        onclick: move |_| {
                            let next = lang().toggled();
                            tracing::debug!(language = %next, "language switched");
                            lang.set(next);
                        },
                        span { class: "navbar__locale-icon", aria_hidden: "true", "🌐" }
                        span { "{text.language_toggle}" }
                    }
                    a { class: "button button--primary navbar__cta", href: "#footer", "{text.request}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{bundle, Language};

    #[test]
    fn every_nav_string_is_shown() {
        for lang in Language::ALL {
            let nav = &bundle(lang).nav;
            let labels = section_labels(nav);
            assert!(labels.iter().all(|l| !l.is_empty()));
            // Remaining fields feed the toggle and the call-to-action.
            for extra in [&nav.request, &nav.language_toggle, &nav.language_label] {
                assert!(!extra.is_empty());
                assert!(!labels.contains(&extra.as_str()));
            }
        }
    }
}
