use dioxus::prelude::*;

use crate::client::{components::HealCheckTitleButton, context::AppContext, router::Route};

#[component]
pub fn AuthNavbar(username: String) -> Element {
    let context = use_context::<AppContext>();
    let navigator = use_navigator();

    let logout = move |_| {
        context.auth().logout();
        navigator.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                HealCheckTitleButton {}
            }
            div {
                class: "navbar-end flex gap-2",
                Link { to: Route::Dashboard {}, class: "btn btn-ghost", "Dashboard" }
                Link { to: Route::Admin {}, class: "btn btn-ghost", "Admin" }
                p { class: "px-2", "{username}" }
                button {
                    class: "btn btn-outline",
                    onclick: logout,
                    "Logout"
                }
            }
        }
    }
}
