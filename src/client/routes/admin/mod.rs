mod images;
mod stats;
mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaImages, FaUsers};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use healcheck::{
    controller::{AdminController, PollOutcome},
    session::WebStorage,
};

use crate::client::{
    components::{Page, StatusAlert},
    context::AppContext,
};

use images::ImagesTab;
use stats::StatsCards;
use users::UsersTab;

/// Admin controller shared by the panel's components, plus the signal that makes them
/// re-render after the controller changed.
#[derive(Clone)]
pub(crate) struct AdminPage {
    pub controller: AdminController<WebStorage>,
    version: Signal<u64>,
}

impl AdminPage {
    /// Subscribe the calling component to controller changes.
    pub fn subscribe(&self) {
        self.version.read();
    }

    /// Re-render every subscribed component.
    pub fn touch(&self) {
        let mut version = self.version;
        version += 1;
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Users,
    Images,
}

#[component]
pub fn Admin() -> Element {
    let context = use_context::<AppContext>();
    let version = use_signal(|| 0u64);
    let page = use_context_provider(|| AdminPage {
        controller: context.admin(),
        version,
    });
    page.subscribe();

    let mut tab = use_signal(|| Tab::Users);
    let poll_interval_ms =
        u32::try_from(context.config.stats_poll_interval().as_millis()).unwrap_or(u32::MAX);

    use_future({
        let page = page.clone();
        move || {
            let page = page.clone();
            async move {
                page.touch();
                // Errors are already on the status banner
                let _ = page.controller.load_users().await;
                page.touch();
                let _ = page.controller.load_images(None).await;
                page.touch();
            }
        }
    });

    use_future({
        let page = page.clone();
        move || {
            let page = page.clone();
            async move {
                page.controller.refresh_stats().await;
                page.touch();

                loop {
                    TimeoutFuture::new(poll_interval_ms).await;

                    match page.controller.poll_stats().await {
                        PollOutcome::Refreshed => page.touch(),
                        PollOutcome::Skipped => tracing::debug!("Stats poll skipped"),
                    }
                }
            }
        }
    });

    let dismiss = {
        let page = page.clone();
        move |_| {
            page.controller.dismiss_status();
            page.touch();
        }
    };

    let status = page.controller.status();
    let has_message = status.message().is_some();

    rsx!(
        Title { "Admin | HealCheck" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                if has_message {
                    div { class: "flex gap-2 items-center",
                        div { class: "flex-1", StatusAlert { status } }
                        button { class: "btn btn-ghost btn-sm", onclick: dismiss, "Dismiss" }
                    }
                }
                StatsCards {}
                div { role: "tablist", class: "tabs tabs-box",
                    button {
                        role: "tab",
                        class: if tab() == Tab::Users { "tab tab-active flex gap-2" } else { "tab flex gap-2" },
                        onclick: move |_| tab.set(Tab::Users),
                        Icon { width: 16, height: 16, icon: FaUsers }
                        "Users"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Images { "tab tab-active flex gap-2" } else { "tab flex gap-2" },
                        onclick: move |_| tab.set(Tab::Images),
                        Icon { width: 16, height: 16, icon: FaImages }
                        "Images"
                    }
                }
                {match tab() {
                    Tab::Users => rsx!(UsersTab {}),
                    Tab::Images => rsx!(ImagesTab {}),
                }}
            }
        }
    )
}
