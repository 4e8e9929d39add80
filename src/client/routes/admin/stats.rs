use dioxus::prelude::*;

use super::AdminPage;

#[component]
pub fn StatsCards() -> Element {
    let page = use_context::<AdminPage>();
    page.subscribe();

    let stats = page.controller.stats();
    let (status_text, status_class) = if stats.online {
        ("Online", "stat-value text-success")
    } else {
        ("Offline", "stat-value text-error")
    };

    rsx!(
        div { class: "stats stats-vertical md:stats-horizontal shadow w-full",
            div { class: "stat",
                div { class: "stat-title", "Total users" }
                div { class: "stat-value", "{stats.total_users}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Total images" }
                div { class: "stat-value", "{stats.total_images}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Analyses today" }
                div { class: "stat-value", "{stats.today_analyses}" }
            }
            div { class: "stat",
                div { class: "stat-title", "API status" }
                div { class: status_class, "{status_text}" }
            }
        }
    )
}
