use dioxus::prelude::*;
use ui::views::DashboardView;
use ui::Destination;

use super::route_for;
use crate::Route;

#[component]
pub fn FanDashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_navigate: move |destination: Destination| {
                // Redirect away without keeping the dashboard in history
                nav.replace(route_for(destination));
            },
            on_open: move |id: i64| {
                nav.push(Route::CelebrityDetail { id });
            },
        }
    }
}
