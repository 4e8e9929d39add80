use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn HealCheckTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Dashboard {},
            class: "btn btn-ghost flex items-center gap-2",
            p { class: "text-xl", "HealCheck" }
        }
    )
}
