use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use healcheck::{
    api::image::ImageFile,
    view::{
        AnalysisView, ImageRow, DETAIL_FALLBACK_LABEL, DETAIL_SIZE, THUMBNAIL_FALLBACK_LABEL,
        THUMBNAIL_SIZE,
    },
};

use crate::client::{
    components::{ImagePreview, Page, StatusAlert},
    context::AppContext,
};

#[component]
pub fn Dashboard() -> Element {
    let context = use_context::<AppContext>();
    let dashboard = use_hook(|| context.dashboard());

    let mut picked = use_signal(|| None::<ImageFile>);
    let mut version = use_signal(|| 0u64);
    version.read();

    // Load the user's upload history once the page mounts
    use_future({
        let dashboard = dashboard.clone();
        move || {
            let dashboard = dashboard.clone();
            async move {
                if dashboard.load_history().await.is_err() {
                    tracing::debug!("History unavailable on dashboard load");
                }
                version += 1;
            }
        }
    });

    let pick_file = {
        let dashboard = dashboard.clone();
        move |evt: FormEvent| {
            let dashboard = dashboard.clone();

            spawn(async move {
                let Some(file) = evt.files().into_iter().next() else {
                    picked.set(None);
                    dashboard.clear_analysis();
                    version += 1;
                    return;
                };

                let content_type = file.content_type().unwrap_or_default();
                if dashboard.validate_file(&content_type, file.size()).is_err() {
                    picked.set(None);
                    version += 1;
                    return;
                }

                match file.read_bytes().await {
                    Ok(bytes) => picked.set(Some(ImageFile {
                        file_name: file.name(),
                        content_type,
                        bytes: bytes.to_vec(),
                    })),
                    Err(e) => tracing::error!("Failed to read {}: {}", file.name(), e),
                }
                version += 1;
            });
        }
    };

    let upload = {
        let dashboard = dashboard.clone();
        move |_| {
            let dashboard = dashboard.clone();
            let file = picked();

            spawn(async move {
                version += 1;
                if dashboard.upload(file.as_ref()).await.is_ok() {
                    picked.set(None);
                }
                version += 1;
            });
        }
    };

    let uploading = dashboard.is_uploading();
    let picked_name = picked.read().as_ref().map(|file| file.file_name.clone());

    rsx!(
        Title { "Dashboard | HealCheck" }
        Meta {
            name: "description",
            content: "Upload a photo of your meal to get its nutrition breakdown."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                StatusAlert { status: dashboard.status() }
                div { class: "card shadow-sm",
                    div { class: "card-body flex flex-col gap-3",
                        h2 { class: "card-title", "Analyze a meal" }
                        input {
                            class: "file-input w-full",
                            r#type: "file",
                            accept: "image/*",
                            onchange: pick_file,
                        }
                        if let Some(name) = picked_name {
                            p { class: "text-sm", "Selected: {name}" }
                        }
                        button {
                            class: "btn btn-primary w-48 flex gap-2",
                            disabled: uploading || picked.read().is_none(),
                            onclick: upload,
                            Icon { width: 16, height: 16, icon: FaUpload }
                            if uploading { "Analyzing..." } else { "Analyze" }
                        }
                    }
                }
                if let Some(analysis) = dashboard.analysis() {
                    AnalysisCard { analysis }
                }
                HistoryTable { rows: dashboard.history_rows() }
            }
        }
    )
}

#[component]
fn AnalysisCard(analysis: AnalysisView) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col md:flex-row gap-4",
                ImagePreview {
                    source: analysis.image.clone(),
                    size: DETAIL_SIZE,
                    fallback_label: DETAIL_FALLBACK_LABEL,
                    class: "w-72 rounded",
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "card-title", "{analysis.food_name}" }
                    div { class: "stats stats-vertical md:stats-horizontal shadow",
                        NutrientStat { label: "Calories", value: analysis.calories.clone() }
                        NutrientStat { label: "Protein", value: analysis.protein.clone() }
                        NutrientStat { label: "Fat", value: analysis.fat.clone() }
                        NutrientStat { label: "Carbohydrate", value: analysis.carbs.clone() }
                    }
                    p { class: "font-semibold", "Suggestion" }
                    p { "{analysis.suggestion}" }
                    p { class: "text-xs opacity-70",
                        "Image #{analysis.id} analyzed {analysis.created_at}"
                    }
                }
            }
        }
    )
}

#[component]
fn NutrientStat(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value text-lg", "{value}" }
        }
    )
}

#[component]
fn HistoryTable(rows: Vec<ImageRow>) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Your history" }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Image" }
                                th { "Food" }
                                th { "Calories" }
                                th { "Analyzed" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: 4, class: "text-center", "No analyses yet" }
                                }
                            }
                            for row in rows {
                                tr { key: "{row.id}",
                                    td {
                                        ImagePreview {
                                            source: row.thumbnail.clone(),
                                            size: THUMBNAIL_SIZE,
                                            fallback_label: THUMBNAIL_FALLBACK_LABEL,
                                            class: "w-16 h-16 object-cover rounded",
                                        }
                                    }
                                    td { "{row.food_name}" }
                                    td { "{row.kcal}" }
                                    td { "{row.created_at}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
