use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTrash, FaUserPlus};
use dioxus_free_icons::Icon;

use healcheck::{controller::UserForm, view::NO_USERS_MESSAGE};

use crate::client::components::ConfirmDialog;

use super::AdminPage;

const DELETE_USER_PROMPT: &str =
    "Are you sure you want to delete this user? This action cannot be undone.";

#[component]
pub fn UsersTab() -> Element {
    let page = use_context::<AdminPage>();
    page.subscribe();

    let mut editing = use_signal(|| None::<UserForm>);
    let mut confirm_delete = use_signal(|| None::<i64>);

    let delete = {
        let page = page.clone();
        move |_| {
            let Some(id) = confirm_delete.take() else {
                return;
            };
            let page = page.clone();

            spawn(async move {
                page.touch();
                let _ = page.controller.delete_user(id).await;
                page.touch();
            });
        }
    };

    let rows = page.controller.user_rows();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "Users" }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| editing.set(Some(UserForm::default())),
                        Icon { width: 16, height: 16, icon: FaUserPlus }
                        "Add user"
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Username" }
                                th { "Email" }
                                th { "Created" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: 5, class: "text-center", "{NO_USERS_MESSAGE}" }
                                }
                            }
                            for row in rows {
                                tr { key: "{row.id}",
                                    td { "{row.id}" }
                                    td { "{row.username}" }
                                    td { "{row.email}" }
                                    td { "{row.created_at}" }
                                    td { class: "flex gap-2",
                                        button {
                                            class: "btn btn-sm btn-outline",
                                            onclick: {
                                                let page = page.clone();
                                                move |_| {
                                                    if let Some(user) = page.controller.user(row.id) {
                                                        editing.set(Some(UserForm::edit(&user)));
                                                    }
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-sm btn-error",
                                            disabled: page.controller.is_deleting_user(row.id),
                                            onclick: move |_| confirm_delete.set(Some(row.id)),
                                            Icon { width: 14, height: 14, icon: FaTrash }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(form) = editing() {
            UserModal {
                form,
                on_close: move |_| editing.set(None),
            }
        }
        if confirm_delete().is_some() {
            ConfirmDialog {
                message: DELETE_USER_PROMPT,
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    )
}

/// Add or edit modal; closes once the server accepted the change.
#[component]
fn UserModal(form: UserForm, on_close: EventHandler<()>) -> Element {
    let page = use_context::<AdminPage>();
    let mut draft = use_signal(|| form.clone());
    let mut saving = use_signal(|| false);

    let creating = form.id.is_none();
    let title = if creating { "Add user" } else { "Edit user" };
    let password_placeholder = if creating {
        "Password"
    } else {
        "New password (leave blank to keep)"
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();

        let page = page.clone();
        let form = draft();

        spawn(async move {
            saving.set(true);
            let result = page.controller.save_user(&form).await;
            saving.set(false);
            page.touch();

            if result.is_ok() {
                on_close.call(());
            }
        });
    };

    let current = draft();

    rsx!(
        div { class: "modal modal-open",
            form { class: "modal-box flex flex-col gap-3",
                onsubmit: save,
                h3 { class: "text-lg font-bold", "{title}" }
                input {
                    class: "input w-full",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{current.username}",
                    oninput: move |evt| draft.write().username = evt.value(),
                }
                input {
                    class: "input w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{current.email}",
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                input {
                    class: "input w-full",
                    r#type: "password",
                    placeholder: password_placeholder,
                    value: "{current.password}",
                    oninput: move |evt| draft.write().password = evt.value(),
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    )
}
