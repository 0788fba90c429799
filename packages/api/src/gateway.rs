//! # API Request Gateway
//!
//! [`Gateway`] is the single chokepoint for outgoing HTTP. It owns the configured
//! base URL and one shared [`reqwest::Client`], and every view reaches the network
//! through it.
//!
//! ## Path resolution
//!
//! | Input | Result |
//! |-------|--------|
//! | `"/celebrities"` (root-relative) | `"<base_url>/celebrities"` |
//! | `"https://other.host/x"` | unchanged |
//!
//! ## Authorization
//!
//! The gateway never attaches credentials on its own. Callers of protected
//! endpoints pass the token to [`Gateway::bearer`].
//!
//! ## Response policy
//!
//! [`Gateway::send`] returns the response only for 2xx statuses; anything else is
//! converted to an [`ApiError`] carrying the server's `message`, if it sent one.
//! Nothing is retried.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct Gateway {
    base_url: String,
    http: Client,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &store::config::ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Prefix root-relative paths with the base URL; pass anything else through.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            path.to_string()
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.resolve(path);
        tracing::debug!("{method} {url}");
        self.http.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Attach `Authorization: Bearer <token>`.
    pub fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token)
    }

    /// Send and reject non-2xx responses.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {e}");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!("{url} answered {status}: {error}");
        Err(error)
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send, discarding whatever body comes back.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    /// Send and collect a binary body.
    pub async fn send_bytes(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = self.send(request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_get_base_url() {
        let gateway = Gateway::new("https://api.example.com/dev");
        assert_eq!(
            gateway.resolve("/celebrities"),
            "https://api.example.com/dev/celebrities"
        );
        assert_eq!(
            gateway.resolve("/fan/7/dashboard"),
            "https://api.example.com/dev/fan/7/dashboard"
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let gateway = Gateway::new("https://api.example.com");
        assert_eq!(
            gateway.resolve("https://cdn.example.org/file.pdf"),
            "https://cdn.example.org/file.pdf"
        );
        assert_eq!(gateway.resolve("relative/path"), "relative/path");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gateway = Gateway::new("http://localhost:3001/");
        assert_eq!(gateway.base_url(), "http://localhost:3001");
        assert_eq!(gateway.resolve("/auth/login"), "http://localhost:3001/auth/login");
    }

    #[test]
    fn test_empty_base_keeps_path() {
        let gateway = Gateway::new("");
        assert_eq!(gateway.resolve("/celebrities"), "/celebrities");
    }

    #[test]
    fn test_from_config() {
        let config = store::ClientConfig::new("https://prod.example.com");
        let gateway = Gateway::from_config(&config.api);
        assert_eq!(gateway.resolve("/fan/me"), "https://prod.example.com/fan/me");
    }

    #[test]
    fn test_bearer_header_is_attached() {
        let gateway = Gateway::new("https://api.example.com");
        let request = Gateway::bearer(gateway.get("/fan/me"), "t-1")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://api.example.com/fan/me");
        assert_eq!(
            request.headers()["authorization"].to_str().unwrap(),
            "Bearer t-1"
        );

        let plain = gateway.get("/celebrities").build().unwrap();
        assert!(plain.headers().get("authorization").is_none());
    }
}
