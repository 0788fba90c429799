use dioxus::prelude::*;
use ui::views::DirectoryView;

use crate::Route;

#[component]
pub fn Directory() -> Element {
    let nav = use_navigator();

    rsx! {
        DirectoryView {
            on_open: move |id: i64| {
                nav.push(Route::CelebrityDetail { id });
            },
        }
    }
}
