//! Login: authenticate, record the identity, resolve the fan profile. Logout
//! lives here too.

use api::{Backend, Credentials};
use store::{AuthSession, KeyValueStore};

use super::{require, Destination, Phase, StepExt, ViewError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    pub fn validate(&self) -> Result<Credentials, ViewError> {
        require(&self.username, "Username")?;
        require(&self.password, "Password")?;
        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Form plus request state, shared by the login and register pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CredentialsState {
    pub form: CredentialsForm,
    pub phase: Phase,
    pub error: Option<String>,
}

impl CredentialsState {
    /// Record the outcome and return where to go on success.
    pub fn settle(&mut self, result: Result<Destination, ViewError>) -> Option<Destination> {
        self.phase.settle();
        match result {
            Ok(destination) => {
                self.error = None;
                Some(destination)
            }
            Err(e) => {
                self.error = Some(e.message());
                None
            }
        }
    }
}

/// Each step awaits the previous one; the first failure stops the flow and
/// whatever was already persisted stays.
pub async fn login<B: Backend, S: KeyValueStore>(
    backend: &B,
    session: &AuthSession<S>,
    form: &CredentialsForm,
) -> Result<Destination, ViewError> {
    let credentials = form.validate()?;
    let token = backend
        .login(&credentials)
        .await
        .or_explain("Login failed")?;
    session.login(credentials.username.as_str(), token.as_str());

    let fan = backend
        .current_fan(&token)
        .await
        .or_explain("Fan profile not found")?;
    session.set_fan_id(fan.id);
    Ok(Destination::Dashboard)
}

/// Clear the identity and return to the directory. The stored fan id stays.
pub fn logout<S: KeyValueStore>(session: &AuthSession<S>) -> Destination {
    session.logout();
    Destination::Home
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake::{Call, FakeBackend};
    use api::ApiError;
    use store::{kv, AuthState, MemoryStore};

    fn riya() -> CredentialsForm {
        CredentialsForm {
            username: "riya".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let backend = FakeBackend::new();
        let session = AuthSession::hydrate(MemoryStore::new());
        let mut state = CredentialsState {
            form: riya(),
            ..Default::default()
        };

        assert!(state.phase.begin());
        let next = state.settle(login(&backend, &session, &state.form).await);

        assert_eq!(next, Some(Destination::Dashboard));
        assert!(state.error.is_none());
        assert_eq!(
            backend.calls(),
            vec![Call::Login("riya".into()), Call::CurrentFan("t-1".into())]
        );
        assert!(matches!(session.state(), AuthState::Authenticated(_)));
        assert_eq!(session.username().as_deref(), Some("riya"));
        assert_eq!(session.store().get(kv::TOKEN_KEY).as_deref(), Some("t-1"));
        assert_eq!(session.fan_id(), Some(42));
    }

    #[tokio::test]
    async fn test_missing_password_makes_no_request() {
        let backend = FakeBackend::new();
        let session = AuthSession::hydrate(MemoryStore::new());
        let form = CredentialsForm {
            username: "riya".into(),
            password: String::new(),
        };

        let err = login(&backend, &session, &form).await.unwrap_err();
        assert_eq!(err.message(), "Password is required");
        assert!(backend.calls().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let backend = FakeBackend::new().failing(
            "login",
            ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#),
        );
        let session = AuthSession::hydrate(MemoryStore::new());
        let mut state = CredentialsState {
            form: riya(),
            ..Default::default()
        };

        let next = state.settle(login(&backend, &session, &state.form).await);
        assert_eq!(next, None);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!session.is_authenticated());
        assert_eq!(backend.calls(), vec![Call::Login("riya".into())]);
    }

    #[tokio::test]
    async fn test_missing_fan_profile_keeps_identity() {
        let backend = FakeBackend::new().failing("current_fan", ApiError::NotFound { message: None });
        let session = AuthSession::hydrate(MemoryStore::new());
        let mut state = CredentialsState {
            form: riya(),
            ..Default::default()
        };

        let next = state.settle(login(&backend, &session, &state.form).await);
        assert_eq!(next, None);
        assert_eq!(state.error.as_deref(), Some("Fan profile not found"));
        // Earlier step stays applied
        assert!(session.is_authenticated());
        assert_eq!(session.fan_id(), None);
    }

    #[test]
    fn test_logout_returns_home_and_keeps_fan_id() {
        let session = AuthSession::hydrate(MemoryStore::new());
        session.login("riya", "t-1");
        session.set_fan_id(42);

        assert_eq!(logout(&session), Destination::Home);
        assert!(!session.is_authenticated());
        assert!(session.store().get(kv::TOKEN_KEY).is_none());
        assert_eq!(session.fan_id(), Some(42));
    }
}
