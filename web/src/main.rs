use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n::Language;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

// Shared theme (ui/assets/theme/main.css), inlined so web and desktop style identically.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Page language follows the browser preference; the navbar toggle flips it.
    let lang = use_signal(Language::detect);
    use_context_provider(|| lang);

    rsx! {
        // Global app resources
        document::Title { "PancreaScan-AI" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
