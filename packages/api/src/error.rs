use serde::Deserialize;
use thiserror::Error;

/// Failure of a single collaborator request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// 401 or 403.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16, message: Option<String> },

    /// 404.
    #[error("not found")]
    NotFound { message: Option<String> },

    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<MessageField>,
}

/// NestJS-style services send either a string or a list of validation messages.
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

impl ApiError {
    /// Build the error for a non-2xx `status` with the raw response `body`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Status { status, message },
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Text to show the user: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        MessageField::One(m) => m,
        MessageField::Many(list) => list.join(", "),
    };
    let message = message.trim().to_string();
    (!message.is_empty()).then_some(message)
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(ApiError::from_status(403, "").is_unauthorized());
        assert!(ApiError::from_status(404, "").is_not_found());
        assert_eq!(
            ApiError::from_status(500, "oops"),
            ApiError::Status {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_message_from_json_body() {
        let err = ApiError::from_status(401, r#"{"statusCode":401,"message":"Invalid credentials"}"#);
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");

        let err = ApiError::from_status(
            400,
            r#"{"message":["name should not be empty","country should not be empty"]}"#,
        );
        assert_eq!(
            err.user_message("x"),
            "name should not be empty, country should not be empty"
        );
    }

    #[test]
    fn test_fallback_when_no_message() {
        assert_eq!(
            ApiError::from_status(500, "<html>").user_message("Login failed"),
            "Login failed"
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"  "}"#).user_message("Login failed"),
            "Login failed"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message("Login failed"),
            "Login failed"
        );
    }
}
