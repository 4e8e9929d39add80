use dioxus::prelude::*;
use dioxus_logger::tracing;

use healcheck::config::Config;

use crate::client::{context::AppContext, router::Route};

#[component]
pub fn App() -> Element {
    let startup = use_hook(|| {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Config::default()
        });

        AppContext::new(config).map_err(|e| e.to_string())
    });

    match startup {
        Ok(context) => rsx! {
            Portal { context }
        },
        Err(message) => rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                p { class: "text-error", "Failed to start HealCheck: {message}" }
            }
        },
    }
}

/// Router root; every page below it reads `context` through `use_context`.
#[component]
fn Portal(context: AppContext) -> Element {
    use_context_provider(|| context);

    rsx! {
        Router::<Route> {}
    }
}
