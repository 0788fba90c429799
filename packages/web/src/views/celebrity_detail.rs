use dioxus::prelude::*;
use ui::views::CelebrityDetailView;

use crate::Route;

#[component]
pub fn CelebrityDetail(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        CelebrityDetailView {
            key: "{id}",
            id: id,
            on_back: move |_| {
                nav.push(Route::Directory {});
            },
        }
    }
}
