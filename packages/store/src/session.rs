//! # Auth session manager
//!
//! [`AuthSession`] owns the current identity. It is a two-state machine:
//!
//! ```text
//!              login(username, token)
//!  Anonymous ───────────────────────────▶ Authenticated(Identity)
//!      ▲                                        │
//!      └──────────────── logout() ──────────────┘
//! ```
//!
//! Every transition is mirrored into a [`KeyValueStore`] (`user` and `token` keys)
//! so it survives a reload, and every subscriber is notified synchronously before
//! the transition call returns. [`AuthSession::hydrate`] restores the state on
//! startup.
//!
//! The fan profile id lives under its own key and is **not** touched by
//! [`AuthSession::logout`]; a later login for a different user overwrites it.
//!
//! Handles are cheap `Rc` clones that all observe the same state, which is what
//! the UI shares through context.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::kv::{KeyValueStore, FAN_ID_KEY, TOKEN_KEY, USER_KEY};

/// The authenticated user's name and bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            AuthState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.identity().map(|i| i.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Handle returned by [`AuthSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner<S> {
    store: S,
    state: RefCell<AuthState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the session state machine.
pub struct AuthSession<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for AuthSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for AuthSession<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> fmt::Debug for AuthSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> AuthSession<S> {
    /// Restore the session from `store`.
    ///
    /// Both `user` and `token` must be present and non-blank to start
    /// authenticated; anything else starts anonymous.
    pub fn hydrate(store: S) -> Self {
        let username = store.get(USER_KEY).filter(|v| !v.trim().is_empty());
        let token = store.get(TOKEN_KEY).filter(|v| !v.trim().is_empty());

        let state = match (username, token) {
            (Some(username), Some(token)) => {
                tracing::debug!("Restored session for {username}");
                AuthState::Authenticated(Identity { username, token })
            }
            _ => AuthState::Anonymous,
        };

        Self {
            inner: Rc::new(Inner {
                store,
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_string)
    }

    /// The persisted username, even when it outlived the token.
    pub fn username(&self) -> Option<String> {
        match self.inner.state.borrow().identity() {
            Some(identity) => Some(identity.username.clone()),
            None => self.inner.store.get(USER_KEY),
        }
    }

    /// Become authenticated as `username`, replacing any current identity.
    pub fn login(&self, username: impl Into<String>, token: impl Into<String>) {
        let identity = Identity {
            username: username.into(),
            token: token.into(),
        };
        self.inner.store.set(USER_KEY, &identity.username);
        self.inner.store.set(TOKEN_KEY, &identity.token);
        tracing::info!("Logged in as {}", identity.username);
        self.transition(AuthState::Authenticated(identity));
    }

    /// Drop the current identity. The fan id key is left in place.
    pub fn logout(&self) {
        self.inner.store.remove(USER_KEY);
        self.inner.store.remove(TOKEN_KEY);
        tracing::info!("Logged out");
        self.transition(AuthState::Anonymous);
    }

    /// Persisted fan profile id. Missing or non-numeric values read as `None`.
    pub fn fan_id(&self) -> Option<i64> {
        self.inner
            .store
            .get(FAN_ID_KEY)
            .and_then(|v| v.trim().parse().ok())
    }

    pub fn set_fan_id(&self, fan_id: i64) {
        self.inner.store.set(FAN_ID_KEY, &fan_id.to_string());
    }

    /// The backing store, for sibling keys such as the theme.
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Register `listener`; it is called with the new state after every transition.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    fn transition(&self, next: AuthState) {
        *self.inner.state.borrow_mut() = next.clone();
        // Snapshot so listeners may (un)subscribe or transition re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
