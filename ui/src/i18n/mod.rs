//! Internationalization (i18n) support for `pancreascan-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/pancreascan-ui.ftl   (fallback/reference)
//!   zh-CN/pancreascan-ui.ftl
//! ```
//!
//! Unlike a runtime-switched global loader, the page needs both languages
//! side by side (the form compares against the defaults of the language it
//! is leaving), so every [`Language`] gets its own loader and a fully
//! resolved [`LocalizedBundle`]. Both are built once, on first use, and never
//! mutated afterwards.
//!
//! Public API surface:
//! - [`lookup`] – bundle for a language code (`en`, `zh`, `zh-CN`, ...).
//! - [`bundle`] / [`loader`] – infallible access by [`Language`].
//! - [`available_languages`] – embedded locale tags.
//! - [`use_language`] / [`use_bundle`] – component hooks over the
//!   `Signal<Language>` context provided by the platform root.
//! - `t!` – keyed lookup against an explicit loader.

mod bundle;

use std::fmt;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use bundle::{
    CardText, ChallengesText, ClinicalText, DemoText, FeaturesText, FooterText, HeroText,
    LocalizedBundle, NavText, StatsText, WorkflowText,
};
pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro routed through an explicit loader.
/// Examples:
///     t!(loader, "nav-features")
///     t!(loader, "report-impression-imaging", imaging = text)
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
    ($loader:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($loader, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "pancreascan-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    #[error("no translations for language code {0:?}")]
    MissingLanguage(String),
}

/// The closed set of page languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Short code used in the UI state (`en` / `zh`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Embedded locale folder.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Zh => "zh-CN",
        }
    }

    /// Caption shown on the toggle, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Parse `en`, `zh` or a region-tagged variant (`en-GB`, `zh_CN`), case-insensitive.
    pub fn from_code(code: &str) -> Result<Self, I18nError> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(I18nError::MissingLanguage(code.to_string())),
        }
    }

    /// Pick the first supported language from the OS / browser preferences.
    pub fn detect() -> Self {
        requested_languages()
            .iter()
            .find_map(|id| Language::from_code(id.language.as_str()).ok())
            .unwrap_or_default()
    }

    fn langid(self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en-US"),
            Language::Zh => langid!("zh-CN"),
        }
    }

    fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Zh => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

struct Catalog {
    loaders: [FluentLanguageLoader; 2],
    bundles: [LocalizedBundle; 2],
}

impl Catalog {
    fn load() -> Self {
        let loaders = Language::ALL.map(language_loader);
        let bundles = [
            LocalizedBundle::resolve(&loaders[0]),
            LocalizedBundle::resolve(&loaders[1]),
        ];
        tracing::debug!(languages = ?available_languages(), "i18n catalog loaded");
        Self { loaders, bundles }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::load);

fn language_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::En.langid());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.langid()]) {
        tracing::error!(language = %lang, %err, "failed selecting language; continuing with fallback");
    }
    // Arguments are echoed into plain text fields; no bidi isolation marks.
    loader.set_use_isolating(false);
    loader
}

/// Force catalog construction (idempotent).
pub fn init() {
    Lazy::force(&CATALOG);
}

/// Bundle for a language code. Fails only for codes outside the closed set.
pub fn lookup(code: &str) -> Result<&'static LocalizedBundle, I18nError> {
    Language::from_code(code).map(bundle)
}

pub fn bundle(lang: Language) -> &'static LocalizedBundle {
    &CATALOG.bundles[lang.index()]
}

/// Loader for messages that take arguments.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    &CATALOG.loaders[lang.index()]
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Current page language, from the platform-provided context.
///
/// Falls back to a component-local signal when no platform root provided one
/// (e.g. a section rendered in isolation).
pub fn use_language() -> Signal<Language> {
    use_hook(|| {
        try_consume_context::<Signal<Language>>()
            .unwrap_or_else(|| Signal::new(Language::default()))
    })
}

/// Bundle for the current page language. Subscribes the caller to language changes.
pub fn use_bundle() -> &'static LocalizedBundle {
    let lang = use_language();
    bundle(lang())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
