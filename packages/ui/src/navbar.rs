use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::controllers::nav::{is_active, nav_links};
use crate::controllers::Destination;
use crate::theme_toggle::ThemeToggle;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the page links, logout and the theme switch.
///
/// Platform packages own routing: `on_navigate` receives the link's path.
#[component]
pub fn Navbar(
    current_path: String,
    on_navigate: EventHandler<&'static str>,
    on_logout: EventHandler<Destination>,
) -> Element {
    let auth = use_auth();
    let authenticated = auth().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "CelebConnect" }
            div {
                class: "navbar-links",
                for link in nav_links(authenticated) {
                    a {
                        key: "{link.href}",
                        href: link.href,
                        class: if is_active(&current_path, link.href) { "nav-link active" } else { "nav-link" },
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(link.href);
                        },
                        "{link.label}"
                    }
                }
                if authenticated {
                    LogoutButton { class: "nav-link nav-logout", on_logout: on_logout }
                }
            }
            ThemeToggle {}
        }
    }
}
