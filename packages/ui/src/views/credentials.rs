//! Login and registration pages. Both collect the same username/password pair
//! and differ only in the flow they run on submit.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::controllers::login::{self, CredentialsState};
use crate::controllers::{register, Destination};
use crate::services::{use_backend, use_config};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(on_navigate: EventHandler<Destination>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let state = use_signal(CredentialsState::default);

    let submit = use_callback(move |_: ()| {
        let mut state = state;
        if !state.write().phase.begin() {
            return;
        }
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            let form = state.read().form.clone();
            let result = login::login(&backend, &session, &form).await;
            let next = state.write().settle(result);
            if let Some(destination) = next {
                on_navigate.call(destination);
            }
        });
    });

    rsx! {
        CredentialsCard {
            title: "Fan Login",
            action: "Login",
            pending_action: "Logging in...",
            state: state,
            on_submit: submit,
            footer_prompt: "No account yet?",
            footer_action: "Register",
            on_footer: move |_| on_navigate.call(Destination::Register),
        }
    }
}

#[component]
pub fn RegisterView(on_navigate: EventHandler<Destination>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let email_domain = use_config().fan.email_domain;
    let state = use_signal(CredentialsState::default);

    let submit = use_callback(move |_: ()| {
        let mut state = state;
        if !state.write().phase.begin() {
            return;
        }
        let backend = backend.clone();
        let session = session.clone();
        let email_domain = email_domain.clone();
        spawn(async move {
            let form = state.read().form.clone();
            let result = register::register(&backend, &session, &form, &email_domain).await;
            let next = state.write().settle(result);
            if let Some(destination) = next {
                on_navigate.call(destination);
            }
        });
    });

    rsx! {
        CredentialsCard {
            title: "Fan Registration",
            action: "Register",
            pending_action: "Registering...",
            state: state,
            on_submit: submit,
            footer_prompt: "Already registered?",
            footer_action: "Login",
            on_footer: move |_| on_navigate.call(Destination::Login),
        }
    }
}

#[component]
fn CredentialsCard(
    title: &'static str,
    action: &'static str,
    pending_action: &'static str,
    state: Signal<CredentialsState>,
    on_submit: EventHandler<()>,
    footer_prompt: &'static str,
    footer_action: &'static str,
    on_footer: EventHandler<()>,
) -> Element {
    let mut state = state;
    let current = state.read();
    let pending = current.phase.is_pending();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "{title}" }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div {
                    class: "field",
                    label { class: "field-label", r#for: "username", "Username" }
                    input {
                        id: "username",
                        class: "field-input",
                        autocomplete: "username",
                        value: "{current.form.username}",
                        oninput: move |evt| state.write().form.username = evt.value(),
                    }
                }
                div {
                    class: "field",
                    label { class: "field-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "field-input",
                        r#type: "password",
                        value: "{current.form.password}",
                        oninput: move |evt| state.write().form.password = evt.value(),
                    }
                }
                if let Some(error) = &current.error {
                    p { class: "view-error", "{error}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: pending,
                    if pending { "{pending_action}" } else { "{action}" }
                }
            }
            p {
                class: "view-muted",
                "{footer_prompt} "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_footer.call(());
                    },
                    "{footer_action}"
                }
            }
        }
    }
}
