use dioxus::prelude::*;
use ui::views::SignupView;

#[component]
pub fn CelebritySignup() -> Element {
    rsx! {
        SignupView {}
    }
}
