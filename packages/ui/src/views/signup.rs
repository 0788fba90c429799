use dioxus::prelude::*;

use crate::controllers::signup::{self, SignupForm, SignupState};
use crate::services::use_backend;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Celebrity onboarding form with AI suggestions.
#[component]
pub fn SignupView() -> Element {
    let backend = use_backend();
    let mut state = use_signal(SignupState::default);

    let suggest = use_callback({
        let backend = backend.clone();
        move |_: ()| {
            if !state.write().suggesting.begin() {
                return;
            }
            let backend = backend.clone();
            spawn(async move {
                let intro = state.read().intro.clone();
                let result = signup::fetch_suggestions(&backend, &intro).await;
                state.write().settle_suggestions(result);
            });
        }
    });

    let submit = use_callback(move |_: ()| {
        if !state.write().submitting.begin() {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let form = state.read().form.clone();
            let result = signup::submit(&backend, &form).await;
            state.write().settle_submit(result);
        });
    });

    let current = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "Add a Celebrity" }

            section {
                class: "suggest",
                label { class: "field-label", r#for: "intro", "Describe the celebrity" }
                textarea {
                    id: "intro",
                    class: "field-input",
                    rows: 3,
                    placeholder: "e.g. Punjabi singer who starred in Udta Punjab",
                    value: "{current.intro}",
                    oninput: move |evt| state.write().intro = evt.value(),
                }
                button {
                    class: "btn btn-secondary",
                    disabled: current.suggesting.is_pending(),
                    onclick: move |_| suggest.call(()),
                    if current.suggesting.is_pending() { "Fetching..." } else { "Get AI Suggestions" }
                }
                if !current.suggestions.is_empty() {
                    ul {
                        class: "suggestions",
                        for (index, suggestion) in current.suggestions.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "suggestion",
                                onclick: move |_| state.write().select(index),
                                strong { "{suggestion.name}" }
                                span { class: "view-muted", " {suggestion.category} · {suggestion.country}" }
                            }
                        }
                    }
                }
            }

            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                FormField {
                    label: "Name",
                    value: current.form.name.clone(),
                    oninput: move |v: String| state.write().form.name = v,
                }
                FormField {
                    label: "Category",
                    value: current.form.category.clone(),
                    oninput: move |v: String| state.write().form.category = v,
                }
                FormField {
                    label: "Country",
                    value: current.form.country.clone(),
                    oninput: move |v: String| state.write().form.country = v,
                }
                FormField {
                    label: "Instagram",
                    value: current.form.instagram.clone(),
                    oninput: move |v: String| state.write().form.instagram = v,
                }
                FormField {
                    label: "Fanbase",
                    input_type: "number",
                    min: "1000",
                    value: current.form.fanbase.clone(),
                    oninput: move |v: String| state.write().form.fanbase = v,
                }
                FormField {
                    label: "Genre",
                    value: current.form.genre.clone(),
                    oninput: move |v: String| state.write().form.genre = v,
                }
                if let Some(error) = &current.error {
                    p { class: "view-error", "{error}" }
                }
                if let Some(message) = &current.message {
                    p { class: "view-notice", "{message}" }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: current.submitting.is_pending(),
                        if current.submitting.is_pending() { "Submitting..." } else { "Onboard Celebrity" }
                    }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| state.write().form = SignupForm::default(),
                        "Clear"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    min: Option<&'static str>,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    let id = label.to_lowercase();
    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "field-input",
                r#type: input_type,
                min: min,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
