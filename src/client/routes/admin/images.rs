use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaTrash};
use dioxus_free_icons::Icon;

use healcheck::view::{
    DetailView, ImageDetail, DETAIL_FALLBACK_LABEL, DETAIL_SIZE, NO_IMAGES_MESSAGE,
    THUMBNAIL_FALLBACK_LABEL, THUMBNAIL_SIZE,
};

use crate::client::components::{ConfirmDialog, ImagePreview};

use super::AdminPage;

const DELETE_IMAGE_PROMPT: &str =
    "Are you sure you want to delete this image? This action cannot be undone.";

#[component]
pub fn ImagesTab() -> Element {
    let page = use_context::<AdminPage>();
    page.subscribe();

    let mut search = use_signal(|| {
        page.controller
            .image_filter()
            .map(|id| id.to_string())
            .unwrap_or_default()
    });
    let mut confirm_delete = use_signal(|| None::<i64>);

    let run_search = {
        let page = page.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let page = page.clone();
            let input = search();

            spawn(async move {
                page.touch();
                let _ = page.controller.search_images(&input).await;
                page.touch();
            });
        }
    };

    let clear_search = {
        let page = page.clone();
        move |_| {
            search.set(String::new());
            let page = page.clone();

            spawn(async move {
                let _ = page.controller.load_images(None).await;
                page.touch();
            });
        }
    };

    let delete = {
        let page = page.clone();
        move |_| {
            let Some(id) = confirm_delete.take() else {
                return;
            };
            let page = page.clone();

            spawn(async move {
                page.touch();
                let _ = page.controller.delete_image(id).await;
                page.touch();
            });
        }
    };

    let close_detail = {
        let page = page.clone();
        move |_| {
            page.controller.close_detail();
            page.touch();
        }
    };

    let rows = page.controller.image_rows();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                div { class: "flex flex-wrap justify-between items-center gap-2",
                    h2 { class: "card-title", "Images" }
                    form { class: "flex gap-2",
                        onsubmit: run_search,
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Filter by user ID",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        button { class: "btn btn-outline", r#type: "submit", "Search" }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: clear_search,
                            "Clear"
                        }
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Image" }
                                th { "User" }
                                th { "Food" }
                                th { "Calories" }
                                th { "Created" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: 7, class: "text-center", "{NO_IMAGES_MESSAGE}" }
                                }
                            }
                            for row in rows {
                                tr { key: "{row.id}",
                                    td { "{row.id}" }
                                    td {
                                        ImagePreview {
                                            source: row.thumbnail.clone(),
                                            size: THUMBNAIL_SIZE,
                                            fallback_label: THUMBNAIL_FALLBACK_LABEL,
                                            class: "w-16 h-16 object-cover rounded cursor-pointer",
                                            onclick: {
                                                let page = page.clone();
                                                move |_| view_image(page.clone(), row.id)
                                            },
                                        }
                                    }
                                    td { "{row.user_id}" }
                                    td { "{row.food_name}" }
                                    td { "{row.kcal}" }
                                    td { "{row.created_at}" }
                                    td { class: "flex gap-2",
                                        button {
                                            class: "btn btn-sm btn-outline",
                                            onclick: {
                                                let page = page.clone();
                                                move |_| view_image(page.clone(), row.id)
                                            },
                                            Icon { width: 14, height: 14, icon: FaEye }
                                        }
                                        button {
                                            class: "btn btn-sm btn-error",
                                            disabled: page.controller.is_deleting_image(row.id),
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
        if let Some(detail) = page.controller.detail() {
            DetailModal { detail, on_close: close_detail }
        }
        if confirm_delete().is_some() {
            ConfirmDialog {
                message: DELETE_IMAGE_PROMPT,
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    )
}

fn view_image(page: AdminPage, id: i64) {
    spawn(async move {
        let _ = page.controller.view_image(id).await;
        page.touch();
    });
}

#[component]
fn DetailModal(detail: ImageDetail, on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                {match detail {
                    ImageDetail::Unavailable => rsx!(
                        p { "Image not found" }
                    ),
                    ImageDetail::Found(view) => rsx!(
                        DetailBody { view }
                    ),
                }}
                div { class: "modal-action",
                    button { class: "btn", onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    )
}

#[component]
fn DetailBody(view: DetailView) -> Element {
    rsx!(
        div { class: "flex flex-col md:flex-row gap-4",
            ImagePreview {
                source: view.image.clone(),
                size: DETAIL_SIZE,
                fallback_label: DETAIL_FALLBACK_LABEL,
                class: "w-72 rounded",
            }
            div { class: "flex flex-col gap-1",
                h3 { class: "text-lg font-bold", "{view.food_name}" }
                p { "Image ID: {view.id}" }
                p { "User ID: {view.user_id}" }
                p { "Calories: {view.kcal}" }
                p { "Weight (g): {view.gam}" }
                p { "Created: {view.created_at}" }
                p { class: "font-semibold mt-2", "AI suggestion" }
                p { "{view.suggestion}" }
            }
        }
    )
}
