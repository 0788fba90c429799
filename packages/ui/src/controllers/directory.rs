//! Celebrity directory: load once, dedupe by name, filter, follow.

use std::collections::{HashMap, HashSet};

use api::{Backend, Celebrity};
use store::{AuthSession, KeyValueStore};

use super::{Phase, StepExt, ViewError};

/// Trimmed, lowercased, whitespace runs collapsed to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Keep the first record for every normalized name, preserving order.
pub fn dedupe_by_name(celebrities: Vec<Celebrity>) -> Vec<Celebrity> {
    let mut seen = HashSet::new();
    celebrities
        .into_iter()
        .filter(|c| seen.insert(normalize_name(&c.name)))
        .collect()
}

/// Case-insensitive substring match over name, category and country.
pub fn matches_query(celebrity: &Celebrity, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&celebrity.name, &celebrity.category, &celebrity.country]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub celebrities: Vec<Celebrity>,
    pub query: String,
    pub followed: HashSet<i64>,
    /// Follow requests in flight, keyed by celebrity id.
    pub following: HashMap<i64, Phase>,
    pub phase: Phase,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl DirectoryState {
    /// Records matching the current query.
    pub fn visible(&self) -> Vec<&Celebrity> {
        self.celebrities
            .iter()
            .filter(|c| matches_query(c, &self.query))
            .collect()
    }

    pub fn is_followed(&self, id: i64) -> bool {
        self.followed.contains(&id)
    }

    pub fn is_follow_pending(&self, id: i64) -> bool {
        self.following.get(&id).is_some_and(|p| p.is_pending())
    }

    pub fn settle_load(&mut self, result: Result<Vec<Celebrity>, ViewError>) {
        self.phase.settle();
        match result {
            Ok(celebrities) => {
                self.celebrities = celebrities;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    /// Returns false if a follow for `id` is already in flight or done.
    pub fn begin_follow(&mut self, id: i64) -> bool {
        if self.is_followed(id) {
            return false;
        }
        self.notice = None;
        self.following.entry(id).or_default().begin()
    }

    /// Optimistic: success marks the id followed locally and is never re-checked.
    pub fn settle_follow(&mut self, id: i64, result: Result<(), ViewError>) {
        self.following.remove(&id);
        match result {
            Ok(()) => {
                self.followed.insert(id);
                self.error = None;
                self.notice = Some("Followed successfully!".to_string());
            }
            Err(e) => self.error = Some(e.message()),
        }
    }
}

/// Fetch the full list, deduplicated.
pub async fn load<B: Backend>(backend: &B) -> Result<Vec<Celebrity>, ViewError> {
    let celebrities = backend
        .list_celebrities()
        .await
        .or_explain("Failed to fetch celebrities")?;
    Ok(dedupe_by_name(celebrities))
}

/// Follow `celebrity_id` as the persisted fan.
pub async fn follow<B: Backend, S: KeyValueStore>(
    backend: &B,
    session: &AuthSession<S>,
    celebrity_id: i64,
) -> Result<(), ViewError> {
    let fan_id = session
        .fan_id()
        .ok_or(ViewError::NotAuthenticated("Fan not logged in"))?;
    backend
        .follow(fan_id, celebrity_id)
        .await
        .or_explain("Failed to follow")
}
