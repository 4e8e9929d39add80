use dioxus::prelude::*;

/// In-page confirmation for destructive actions
#[component]
pub fn ConfirmDialog(
    message: &'static str,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                p { class: "py-2", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    )
}
