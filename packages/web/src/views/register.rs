//! Registration page.

use dioxus::prelude::*;
use ui::views::RegisterView;
use ui::Destination;

use super::route_for;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_navigate: move |destination: Destination| {
                nav.push(route_for(destination));
            },
        }
    }
}
