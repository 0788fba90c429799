//! Registration: create the user, log in, create the fan profile.

use api::{Backend, NewFan};
use store::{AuthSession, KeyValueStore};

use super::login::CredentialsForm;
use super::{Destination, StepExt, ViewError};

/// The identity is only recorded once all three calls have succeeded; a
/// failure part way leaves the server-side user in place.
pub async fn register<B: Backend, S: KeyValueStore>(
    backend: &B,
    session: &AuthSession<S>,
    form: &CredentialsForm,
    email_domain: &str,
) -> Result<Destination, ViewError> {
    let credentials = form.validate()?;
    backend
        .register_user(&credentials)
        .await
        .or_explain("Registration failed")?;
    let token = backend
        .login(&credentials)
        .await
        .or_explain("Login failed")?;
    let fan = backend
        .create_fan(&token, &NewFan::placeholder(&credentials, email_domain))
        .await
        .or_explain("Fan profile creation failed")?;

    session.login(credentials.username.as_str(), token.as_str());
    session.set_fan_id(fan.id);
    Ok(Destination::Dashboard)
}
