use dioxus::prelude::*;

use healcheck::controller::PageStatus;

/// Success or error banner for a page's current status; renders nothing otherwise
#[component]
pub fn StatusAlert(status: PageStatus) -> Element {
    match status {
        PageStatus::Success(message) => rsx!(
            div { role: "alert", class: "alert alert-success",
                span { "{message}" }
            }
        ),
        PageStatus::Error(message) => rsx!(
            div { role: "alert", class: "alert alert-error",
                span { "{message}" }
            }
        ),
        PageStatus::Idle | PageStatus::Loading => rsx!(),
    }
}
