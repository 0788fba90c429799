use dioxus::prelude::*;

use crate::auth::use_session;
use crate::controllers::dashboard::{self, DashboardState, EMPTY};
use crate::controllers::Destination;
use crate::services::use_backend;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The fan's followed celebrities. Without a stored fan id the view reports the
/// problem and sends the user to the login page.
#[component]
pub fn DashboardView(on_navigate: EventHandler<Destination>, on_open: EventHandler<i64>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let greeting = use_hook({
        let session = session.clone();
        move || dashboard::greeting_name(&session)
    });
    let mut state = use_signal(DashboardState::default);

    let _loader = use_resource({
        let backend = backend.clone();
        let session = session.clone();
        move || {
            let backend = backend.clone();
            let session = session.clone();
            async move {
                let fan_id = match dashboard::require_fan_id(&session) {
                    Ok(id) => id,
                    Err(e) => {
                        tracing::warn!("Dashboard opened without a fan id");
                        let destination = state.write().reject(e);
                        on_navigate.call(destination);
                        return;
                    }
                };
                state.write().phase.begin();
                let result = dashboard::load(&backend, fan_id).await;
                state.write().settle_load(result);
            }
        }
    });

    let unfollow = use_callback(move |celebrity_id: i64| {
        let Ok(fan_id) = dashboard::require_fan_id(&session) else {
            return;
        };
        if !state.write().begin_unfollow(celebrity_id) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = dashboard::unfollow(&backend, fan_id, celebrity_id).await;
            state.write().settle_unfollow(celebrity_id, result);
        });
    });

    let current = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            h1 { class: "page-title", "Welcome, {greeting}!" }
            h2 { class: "section-title", "Celebrities you follow" }
            if let Some(error) = &current.error {
                p { class: "view-error", "{error}" }
            }
            if current.phase.is_pending() {
                p { class: "view-muted", "Loading your dashboard..." }
            }
            if current.is_empty() {
                p { class: "view-muted", "{EMPTY}" }
            }
            ul {
                class: "followed-list",
                for entry in current.followed.iter() {
                    li {
                        key: "{entry.celebrity_id}-{entry.followed_at}",
                        class: "followed-item",
                        span {
                            class: "followed-name",
                            onclick: {
                                let id = entry.celebrity_id;
                                move |_| on_open.call(id)
                            },
                            "{entry.celebrity_name}"
                        }
                        span { class: "view-muted", "Followed on " {entry.followed_on()} }
                        button {
                            class: "btn btn-secondary",
                            disabled: current.is_unfollow_pending(entry.celebrity_id),
                            onclick: {
                                let id = entry.celebrity_id;
                                move |_| unfollow.call(id)
                            },
                            "Unfollow"
                        }
                    }
                }
            }
        }
    }
}
