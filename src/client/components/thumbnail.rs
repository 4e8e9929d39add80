use dioxus::prelude::*;

use healcheck::view::{placeholder_data_uri, ImageSource};

/// An uploaded image that swaps to a labelled placeholder if it fails to load
#[component]
pub fn ImagePreview(
    source: ImageSource,
    size: u32,
    fallback_label: &'static str,
    class: Option<&'static str>,
    onclick: Option<EventHandler<()>>,
) -> Element {
    let mut failed = use_signal(|| false);
    let class: &str = class.unwrap_or("");

    let src = if failed() {
        placeholder_data_uri(fallback_label, size)
    } else {
        source.src(size)
    };

    rsx!(
        img {
            class: "{class}",
            src: "{src}",
            alt: "Image",
            onerror: move |_| failed.set(true),
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
        }
    )
}
