//! # View controllers
//!
//! Platform-independent state and async flows behind each page. Views own a
//! `Signal` of the page state and drive it through the same three phases:
//!
//! ```text
//! Idle ──begin()──▶ Pending ──settle(result)──▶ Settled
//!                      ▲                            │
//!                      └──────────begin()───────────┘
//! ```
//!
//! `begin()` refuses while a request is already pending, which is what disables
//! re-submission. Flows are generic over [`api::Backend`] and
//! [`store::KeyValueStore`] so tests run them against fakes.
//!
//! | Module | Page |
//! |--------|------|
//! | [`directory`] | celebrity list with search and follow |
//! | [`detail`] | single celebrity with document download |
//! | [`signup`] | new celebrity form with AI suggestions |
//! | [`login`] | login flow |
//! | [`register`] | registration flow |
//! | [`dashboard`] | followed celebrities with unfollow |
//! | [`nav`] | navigation shell links |

use api::ApiError;
use thiserror::Error;

pub mod dashboard;
pub mod detail;
pub mod directory;
pub mod login;
pub mod nav;
pub mod register;
pub mod signup;

#[cfg(test)]
pub(crate) mod fake;

/// Request lifecycle of one controller action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Settled,
}

impl Phase {
    pub fn is_pending(self) -> bool {
        self == Phase::Pending
    }

    /// Move to `Pending`, unless already there.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Phase::Pending;
        true
    }

    pub fn settle(&mut self) {
        *self = Phase::Settled;
    }
}

/// Where a finished flow wants to go next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    Dashboard,
}

/// Everything a controller action can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// A required form field was empty; no request was made.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The action needs an identity the client does not have; no request was made.
    #[error("{0}")]
    NotAuthenticated(&'static str),

    /// A collaborator call failed.
    #[error("{fallback}: {source}")]
    Request {
        fallback: &'static str,
        source: ApiError,
    },

    /// The downloaded document could not be handed to the user.
    #[error("Failed to save document: {0}")]
    Save(String),
}

impl ViewError {
    /// Human-readable text for inline display.
    pub fn message(&self) -> String {
        match self {
            ViewError::Request { fallback, source } => source.user_message(fallback),
            other => other.to_string(),
        }
    }
}

/// Attach the generic message a failed step falls back to.
pub(crate) trait StepExt<T> {
    fn or_explain(self, fallback: &'static str) -> Result<T, ViewError>;
}

impl<T> StepExt<T> for Result<T, ApiError> {
    fn or_explain(self, fallback: &'static str) -> Result<T, ViewError> {
        self.map_err(|source| {
            tracing::warn!("{fallback}: {source}");
            ViewError::Request { fallback, source }
        })
    }
}

/// Fail with [`ViewError::Missing`] when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ViewError> {
    if value.trim().is_empty() {
        Err(ViewError::Missing(field))
    } else {
        Ok(())
    }
}
