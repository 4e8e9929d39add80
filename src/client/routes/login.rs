use dioxus::prelude::*;

use healcheck::validation::LoginForm;

use crate::client::{
    components::{Page, StatusAlert},
    context::AppContext,
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let context = use_context::<AppContext>();
    let auth = use_hook(|| context.auth());
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    // Bumped whenever the controller's state changed outside of a signal
    let mut version = use_signal(|| 0u64);
    version.read();

    let logged_in = auth.current_session().is_some();
    use_effect(move || {
        if logged_in {
            navigator.replace(Route::Dashboard {});
        }
    });

    let submit = {
        let auth = auth.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let auth = auth.clone();
            let form = LoginForm {
                username: username(),
                password: password(),
            };

            spawn(async move {
                version += 1;
                let result = auth.login(&form).await;
                version += 1;

                if result.is_ok() {
                    navigator.push(Route::Dashboard {});
                }
            });
        }
    };

    let submitting = auth.is_submitting();

    rsx!(
        Title { "Login | HealCheck" }
        Page { class: "flex flex-col items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-3",
                    onsubmit: submit,
                    h2 { class: "card-title", "Sign in to HealCheck" }
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
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Signing in..." } else { "Sign in" }
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
