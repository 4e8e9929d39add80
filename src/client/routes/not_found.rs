use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx!(
        Title { "Not Found | HealCheck" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "Page not found" }
            Link { to: Route::Login {}, class: "btn btn-outline", "Back to HealCheck" }
        }
    )
}
