//! Login page.

use dioxus::prelude::*;
use ui::views::LoginView;
use ui::Destination;

use super::route_for;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_navigate: move |destination: Destination| {
                nav.push(route_for(destination));
            },
        }
    }
}
