//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::AuthState;

use crate::controllers::{login, Destination};
use crate::session_store::{make_session_store, Session};

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared session handle, for flows that change the identity.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
///
/// The session is restored from the platform store once, and every transition
/// is mirrored into the [`use_auth`] signal.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(|| Session::hydrate(make_session_store()));
    let auth_state = use_signal(|| session.state());

    let subscription = use_hook({
        let session = session.clone();
        move || {
            session.subscribe(move |next| {
                let mut auth_state = auth_state;
                auth_state.set(next.clone());
            })
        }
    });
    use_drop({
        let session = session.clone();
        move || session.unsubscribe(subscription)
    });

    use_context_provider(|| session.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user. `on_logout` receives where to go next.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<Destination>,
) -> Element {
    let session = use_session();

    let onclick = move |_| on_logout.call(login::logout(&session));

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
