use dioxus::prelude::*;

use crate::client::{components::AuthNavbar, context::AppContext, router::Route};

/// Layout of pages that require a login; redirects to the login page without a session.
#[component]
pub fn AuthLayout() -> Element {
    let context = use_context::<AppContext>();
    let navigator = use_navigator();

    let session = context.sessions.current();
    let logged_in = session.is_some();

    use_effect(move || {
        if !logged_in {
            navigator.replace(Route::Login {});
        }
    });

    match session {
        Some(session) => rsx! {
            AuthNavbar { username: session.username }
            Outlet::<Route> {}
        },
        None => rsx!(),
    }
}
