use dioxus::prelude::*;
use store::Theme;

use crate::auth::use_session;
use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// Set or clear the `dark` class on the document element.
pub fn apply_theme(theme: Theme) {
    let js = format!(
        "document.documentElement.classList.toggle('dark', {});",
        theme.is_dark()
    );
    document::eval(&js);
}

/// Dark/light switch. Restores the persisted theme on mount.
#[component]
pub fn ThemeToggle() -> Element {
    let session = use_session();
    let mut theme = use_signal(|| Theme::load(session.store()));

    use_effect(move || apply_theme(theme()));

    let onclick = move |_| {
        let next = theme().toggled();
        next.save(session.store());
        tracing::debug!("Theme set to {}", next.as_str());
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: if theme().is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: onclick,
            if theme().is_dark() {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
