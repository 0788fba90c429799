use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};
use crate::controllers::detail::{
    self, download_notice, format_fanbase, DetailState, DOWNLOADING, NOT_FOUND,
};
use crate::download::save_document;
use crate::services::use_backend;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// One celebrity's profile with the PDF download.
///
/// The record is fetched once; platform packages remount the view (by `key`)
/// when `id` changes.
#[component]
pub fn CelebrityDetailView(id: i64, on_back: EventHandler<()>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let auth = use_auth();
    let mut state = use_signal(DetailState::default);

    let _loader = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                state.write().phase.begin();
                let result = detail::load(&backend, id).await;
                state.write().settle_load(result);
            }
        }
    });

    let download = use_callback(move |_: ()| {
        let Some(name) = state.read().celebrity.as_ref().map(|c| c.name.clone()) else {
            return;
        };
        if !state.write().download.begin() {
            return;
        }
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            let result = detail::download(&backend, &session, &name, save_document).await;
            state.write().settle_download(result);
        });
    });

    let current = state.read();
    let signed_in = auth().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            button {
                class: "btn btn-link",
                onclick: move |_| on_back.call(()),
                "← Back"
            }
            if current.phase.is_pending() {
                p { class: "view-muted", "Loading profile..." }
            }
            if let Some(error) = &current.error {
                p { class: "view-error", "{error}" }
            }
            if current.is_missing() {
                p { class: "view-muted", "{NOT_FOUND}" }
            }
            if let Some(celebrity) = &current.celebrity {
                div {
                    class: "profile",
                    h1 { class: "page-title", "{celebrity.name}" }
                    dl {
                        class: "profile-fields",
                        dt { "Category" }
                        dd { "{celebrity.category}" }
                        dt { "Country" }
                        dd { "{celebrity.country}" }
                        if let Some(genre) = &celebrity.genre {
                            dt { "Genre" }
                            dd { "{genre}" }
                        }
                        dt { "Fanbase" }
                        dd { {format_fanbase(celebrity.fanbase)} }
                        if !celebrity.instagram.is_empty() {
                            dt { "Instagram" }
                            dd {
                                a {
                                    href: "{celebrity.instagram}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{celebrity.instagram}"
                                }
                            }
                        }
                    }
                    if let Some(notice) = download_notice(signed_in) {
                        p { class: "view-muted", "{notice}" }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: current.download.is_pending(),
                            onclick: move |_| download.call(()),
                            if current.download.is_pending() {
                                "{DOWNLOADING}"
                            } else {
                                "Download PDF"
                            }
                        }
                    }
                }
            }
        }
    }
}
