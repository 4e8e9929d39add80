use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUserPlus;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use healcheck::validation::RegisterForm;

use crate::client::{
    components::{Page, StatusAlert},
    context::AppContext,
    router::Route,
};

/// Delay between a successful registration and the redirect to login
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn Register() -> Element {
    let context = use_context::<AppContext>();
    let auth = use_hook(|| context.auth());
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut version = use_signal(|| 0u64);
    version.read();

    let submit = {
        let auth = auth.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let auth = auth.clone();
            let form = RegisterForm {
                username: username(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
            };

            spawn(async move {
                version += 1;
                let result = auth.register(&form).await;
                version += 1;

                if result.is_ok() {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigator.push(Route::Login {});
                }
            });
        }
    };

    let submitting = auth.is_submitting();

    rsx!(
        Title { "Register | HealCheck" }
        Page { class: "flex flex-col items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-3",
                    onsubmit: submit,
                    h2 { class: "card-title", "Create an account" }
                    StatusAlert { status: auth.status() }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email (optional)",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: "{confirm_password}",
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        r#type: "submit",
                        disabled: submitting,
                        Icon { width: 16, height: 16, icon: FaUserPlus }
                        if submitting { "Creating account..." } else { "Register" }
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Sign in" }
                    }
                }
            }
        }
    )
}
