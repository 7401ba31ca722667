use dioxus::prelude::*;
use shared_types::FeatureFlags;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        main { class: "home-page",
            section { class: "home-hero",
                h1 { class: "page-title",
                    "Switch To "
                    span { class: "brand-gradient", "Electric" }
                }
                p { class: "page-subtitle",
                    "Trade in your petrol or diesel vehicle and put its value towards a new EV."
                }
                Link { to: Route::Exchange {}, class: "home-cta", "Exchange your vehicle" }
                if flags.api_docs {
                    a { class: "home-docs-link", href: "/docs", "API reference" }
                }
            }
        }
    }
}
