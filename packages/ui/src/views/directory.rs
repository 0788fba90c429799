use api::Celebrity;
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::controllers::detail::format_fanbase;
use crate::controllers::directory::{self, DirectoryState};
use crate::services::use_backend;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Searchable celebrity list with per-card follow buttons.
#[component]
pub fn DirectoryView(on_open: EventHandler<i64>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut state = use_signal(DirectoryState::default);

    // Load once on mount
    let _loader = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                state.write().phase.begin();
                let result = directory::load(&backend).await;
                state.write().settle_load(result);
            }
        }
    });

    let follow = use_callback(move |id: i64| {
        if !state.write().begin_follow(id) {
            return;
        }
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            let result = directory::follow(&backend, &session, id).await;
            state.write().settle_follow(id, result);
        });
    });

    let current = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            h1 { class: "page-title", "Celebrities" }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by name, category or country",
                value: "{current.query}",
                oninput: move |evt| state.write().query = evt.value(),
            }
            if let Some(notice) = &current.notice {
                p { class: "view-notice", "{notice}" }
            }
            if let Some(error) = &current.error {
                p { class: "view-error", "{error}" }
            }
            if current.phase.is_pending() {
                p { class: "view-muted", "Loading celebrities..." }
            } else if current.visible().is_empty() {
                p { class: "view-muted", "No celebrities found." }
            }
            div {
                class: "card-grid",
                for celebrity in current.visible() {
                    CelebrityCard {
                        key: "{celebrity.id}",
                        celebrity: celebrity.clone(),
                        followed: current.is_followed(celebrity.id),
                        pending: current.is_follow_pending(celebrity.id),
                        on_open: on_open,
                        on_follow: follow,
                    }
                }
            }
        }
    }
}

#[component]
fn CelebrityCard(
    celebrity: Celebrity,
    followed: bool,
    pending: bool,
    on_open: EventHandler<i64>,
    on_follow: EventHandler<i64>,
) -> Element {
    let id = celebrity.id;
    let fanbase = format_fanbase(celebrity.fanbase);

    rsx! {
        div {
            class: "card",
            h2 {
                class: "card-title",
                onclick: move |_| on_open.call(id),
                "{celebrity.name}"
            }
            p { class: "card-meta", "{celebrity.category} · {celebrity.country}" }
            p { class: "card-meta", "Fanbase: {fanbase}" }
            if !celebrity.instagram.is_empty() {
                a {
                    class: "card-link",
                    href: "{celebrity.instagram}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Instagram"
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_open.call(id),
                    "View Profile"
                }
                button {
                    class: if followed { "btn btn-muted" } else { "btn btn-primary" },
                    disabled: followed || pending,
                    onclick: move |_| on_follow.call(id),
                    if followed {
                        "Following"
                    } else if pending {
                        "Following..."
                    } else {
                        "Follow"
                    }
                }
            }
        }
    }
}
