//! # Collaborator services
//!
//! [`Backend`] is the contract the view controllers program against; one method per
//! collaborator call. [`HttpBackend`] implements it over the [`Gateway`], and tests
//! substitute a scripted fake.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_celebrities`](Backend::list_celebrities) | `GET /celebrities` |
//! | [`get_celebrity`](Backend::get_celebrity) | `GET /celebrities/{id}` |
//! | [`create_celebrity`](Backend::create_celebrity) | `POST /celebrities` |
//! | [`suggest_celebrities`](Backend::suggest_celebrities) | `POST /openrouter/celebrity-suggestions` |
//! | [`register_user`](Backend::register_user) | `POST /users/register` |
//! | [`login`](Backend::login) | `POST /auth/login` |
//! | [`current_fan`](Backend::current_fan) | `GET /fan/me` (bearer) |
//! | [`create_fan`](Backend::create_fan) | `POST /fan` (bearer) |
//! | [`follow`](Backend::follow) / [`unfollow`](Backend::unfollow) | `POST /fan/follow`, `POST /fan/unfollow` |
//! | [`dashboard`](Backend::dashboard) | `GET /fan/{fanId}/dashboard` |
//! | [`celebrity_document`](Backend::celebrity_document) | `GET /pdf/celebrity/name/{name}` (bearer) |

use std::future::Future;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{
    Celebrity, CelebritySuggestion, Credentials, FanProfile, FollowRequest, FollowedCelebrity,
    NewCelebrity, NewFan, SuggestionQuery, SuggestionResponse, TokenResponse,
};

/// Async interface to every external service the frontend talks to.
pub trait Backend {
    fn list_celebrities(&self) -> impl Future<Output = Result<Vec<Celebrity>, ApiError>>;

    fn get_celebrity(&self, id: i64) -> impl Future<Output = Result<Celebrity, ApiError>>;

    fn create_celebrity(
        &self,
        celebrity: &NewCelebrity,
    ) -> impl Future<Output = Result<Celebrity, ApiError>>;

    fn suggest_celebrities(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<CelebritySuggestion>, ApiError>>;

    fn register_user(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Exchange credentials for a bearer token.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<String, ApiError>>;

    fn current_fan(&self, token: &str) -> impl Future<Output = Result<FanProfile, ApiError>>;

    fn create_fan(
        &self,
        token: &str,
        fan: &NewFan,
    ) -> impl Future<Output = Result<FanProfile, ApiError>>;

    fn follow(
        &self,
        fan_id: i64,
        celebrity_id: i64,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn unfollow(
        &self,
        fan_id: i64,
        celebrity_id: i64,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn dashboard(
        &self,
        fan_id: i64,
    ) -> impl Future<Output = Result<Vec<FollowedCelebrity>, ApiError>>;

    /// Generated profile document for the celebrity called `name`.
    fn celebrity_document(
        &self,
        token: &str,
        name: &str,
    ) -> impl Future<Output = Result<Vec<u8>, ApiError>>;
}

/// Request paths, all relative to the gateway's base URL.
pub mod paths {
    pub const CELEBRITIES: &str = "/celebrities";
    pub const SUGGESTIONS: &str = "/openrouter/celebrity-suggestions";
    pub const REGISTER: &str = "/users/register";
    pub const LOGIN: &str = "/auth/login";
    pub const FAN: &str = "/fan";
    pub const FAN_ME: &str = "/fan/me";
    pub const FOLLOW: &str = "/fan/follow";
    pub const UNFOLLOW: &str = "/fan/unfollow";

    pub fn celebrity(id: i64) -> String {
        format!("{CELEBRITIES}/{id}")
    }

    pub fn dashboard(fan_id: i64) -> String {
        format!("{FAN}/{fan_id}/dashboard")
    }

    pub fn celebrity_document(name: &str) -> String {
        format!("/pdf/celebrity/name/{}", urlencoding::encode(name))
    }
}

/// [`Backend`] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    gateway: Gateway,
}

impl HttpBackend {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.gateway.base_url() == other.gateway.base_url()
    }
}

impl Backend for HttpBackend {
    async fn list_celebrities(&self) -> Result<Vec<Celebrity>, ApiError> {
        self.gateway
            .send_json(self.gateway.get(paths::CELEBRITIES))
            .await
    }

    async fn get_celebrity(&self, id: i64) -> Result<Celebrity, ApiError> {
        self.gateway
            .send_json(self.gateway.get(&paths::celebrity(id)))
            .await
    }

    async fn create_celebrity(&self, celebrity: &NewCelebrity) -> Result<Celebrity, ApiError> {
        let request = self.gateway.post(paths::CELEBRITIES).json(celebrity);
        self.gateway.send_json(request).await
    }

    async fn suggest_celebrities(&self, query: &str) -> Result<Vec<CelebritySuggestion>, ApiError> {
        let request = self.gateway.post(paths::SUGGESTIONS).json(&SuggestionQuery {
            query: query.to_string(),
        });
        let response: SuggestionResponse = self.gateway.send_json(request).await?;
        Ok(response.suggestions)
    }

    async fn register_user(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.gateway.post(paths::REGISTER).json(credentials);
        self.gateway.send_empty(request).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = self.gateway.post(paths::LOGIN).json(credentials);
        let response: TokenResponse = self.gateway.send_json(request).await?;
        Ok(response.access_token)
    }

    async fn current_fan(&self, token: &str) -> Result<FanProfile, ApiError> {
        let request = Gateway::bearer(self.gateway.get(paths::FAN_ME), token);
        self.gateway.send_json(request).await
    }

    async fn create_fan(&self, token: &str, fan: &NewFan) -> Result<FanProfile, ApiError> {
        let request = Gateway::bearer(self.gateway.post(paths::FAN), token).json(fan);
        self.gateway.send_json(request).await
    }

    async fn follow(&self, fan_id: i64, celebrity_id: i64) -> Result<(), ApiError> {
        let request = self.gateway.post(paths::FOLLOW).json(&FollowRequest {
            fan_id,
            celebrity_id,
        });
        self.gateway.send_empty(request).await
    }

    async fn unfollow(&self, fan_id: i64, celebrity_id: i64) -> Result<(), ApiError> {
        let request = self.gateway.post(paths::UNFOLLOW).json(&FollowRequest {
            fan_id,
            celebrity_id,
        });
        self.gateway.send_empty(request).await
    }

    async fn dashboard(&self, fan_id: i64) -> Result<Vec<FollowedCelebrity>, ApiError> {
        self.gateway
            .send_json(self.gateway.get(&paths::dashboard(fan_id)))
            .await
    }

    async fn celebrity_document(&self, token: &str, name: &str) -> Result<Vec<u8>, ApiError> {
        let request = Gateway::bearer(
            self.gateway.get(&paths::celebrity_document(name)),
            token,
        );
        self.gateway.send_bytes(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(paths::celebrity(12), "/celebrities/12");
        assert_eq!(paths::dashboard(5), "/fan/5/dashboard");
    }

    #[test]
    fn test_document_path_is_url_encoded() {
        assert_eq!(
            paths::celebrity_document("Diljit Dosanjh"),
            "/pdf/celebrity/name/Diljit%20Dosanjh"
        );
        assert_eq!(
            paths::celebrity_document("AC/DC & Co"),
            "/pdf/celebrity/name/AC%2FDC%20%26%20Co"
        );
    }

    #[test]
    fn test_http_backend_uses_one_base() {
        let backend = HttpBackend::new(Gateway::new("https://api.example.com/dev"));
        assert_eq!(
            backend.gateway().resolve(&paths::dashboard(3)),
            "https://api.example.com/dev/fan/3/dashboard"
        );
        assert_eq!(backend, backend.clone());
    }
}
