//! Layout wrapping every page: the navbar above the routed view.

use dioxus::prelude::*;
use ui::{Destination, Navbar};

use super::route_for;
use crate::Route;

#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let on_navigate = move |href: &'static str| match href.parse::<Route>() {
        Ok(target) => {
            nav.push(target);
        }
        Err(e) => tracing::warn!("No route for {href}: {e}"),
    };

    rsx! {
        Navbar {
            current_path: route.to_string(),
            on_navigate: on_navigate,
            on_logout: move |destination: Destination| {
                nav.push(route_for(destination));
            },
        }
        main {
            Outlet::<Route> {}
        }
    }
}
