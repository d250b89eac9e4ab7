use dioxus::prelude::*;

use crate::components::Footer;
use crate::demo::DemoView;
use crate::views::{Challenges, Clinical, Hero, Workflow};

/// The whole landing page, top to bottom.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { id: "top", class: "page page-home",
            Hero {}
            Challenges {}
            Workflow {}
            DemoView {}
            Clinical {}
        }
        Footer {}
    }
}
