//! Fan dashboard: followed celebrities with unfollow.

use std::collections::HashMap;

use api::{Backend, FollowedCelebrity};
use store::{AuthSession, KeyValueStore};

use super::{Destination, Phase, StepExt, ViewError};

pub const EMPTY: &str = "You're not following any celebrities yet.";

/// Stored username, or `"Fan"`.
pub fn greeting_name<S: KeyValueStore>(session: &AuthSession<S>) -> String {
    session
        .username()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Fan".to_string())
}

pub fn require_fan_id<S: KeyValueStore>(session: &AuthSession<S>) -> Result<i64, ViewError> {
    session.fan_id().ok_or(ViewError::NotAuthenticated(
        "Fan ID not found. Please log in again.",
    ))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub followed: Vec<FollowedCelebrity>,
    pub phase: Phase,
    pub unfollowing: HashMap<i64, Phase>,
    pub error: Option<String>,
}

impl DashboardState {
    /// Record a failed entry check; the page should leave for the login screen.
    pub fn reject(&mut self, error: ViewError) -> Destination {
        self.phase.settle();
        self.error = Some(error.message());
        Destination::Login
    }

    pub fn is_empty(&self) -> bool {
        self.phase == Phase::Settled && self.error.is_none() && self.followed.is_empty()
    }

    pub fn settle_load(&mut self, result: Result<Vec<FollowedCelebrity>, ViewError>) {
        self.phase.settle();
        match result {
            Ok(followed) => {
                self.followed = followed;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    pub fn begin_unfollow(&mut self, celebrity_id: i64) -> bool {
        self.unfollowing.entry(celebrity_id).or_default().begin()
    }

    pub fn is_unfollow_pending(&self, celebrity_id: i64) -> bool {
        self.unfollowing
            .get(&celebrity_id)
            .is_some_and(|p| p.is_pending())
    }

    pub fn settle_unfollow(&mut self, celebrity_id: i64, result: Result<(), ViewError>) {
        self.unfollowing.remove(&celebrity_id);
        match result {
            Ok(()) => {
                self.apply_unfollowed(celebrity_id);
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    /// Drop every entry for `celebrity_id`; the list is not re-fetched.
    pub fn apply_unfollowed(&mut self, celebrity_id: i64) {
        self.followed.retain(|f| f.celebrity_id != celebrity_id);
    }
}

pub async fn load<B: Backend>(
    backend: &B,
    fan_id: i64,
) -> Result<Vec<FollowedCelebrity>, ViewError> {
    backend
        .dashboard(fan_id)
        .await
        .or_explain("Failed to load fan dashboard")
}

pub async fn unfollow<B: Backend>(
    backend: &B,
    fan_id: i64,
    celebrity_id: i64,
) -> Result<(), ViewError> {
    backend
        .unfollow(fan_id, celebrity_id)
        .await
        .or_explain("Unfollow failed")
}
