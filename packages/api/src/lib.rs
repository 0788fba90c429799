//! # API crate: HTTP access to the CelebConnect collaborator services
//!
//! Every network call the frontend makes goes through this crate. The services
//! themselves (celebrity catalogue, auth, fan profiles, follows, AI suggestions and
//! PDF generation) are external; this crate only knows their wire contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | [`Gateway`]: base-URL resolution, bearer helper, status → [`ApiError`] mapping |
//! | [`backend`] | [`Backend`] trait (one method per collaborator call) and its HTTP implementation [`HttpBackend`] |
//! | [`models`] | Request/response bodies |
//! | [`error`] | [`ApiError`] |
//!
//! Views never build URLs themselves; they hold an [`HttpBackend`] (through
//! context) and the controllers are generic over [`Backend`] so they can be tested
//! against a fake.

pub mod backend;
pub mod error;
pub mod gateway;
pub mod models;

pub use backend::{Backend, HttpBackend};
pub use error::ApiError;
pub use gateway::Gateway;
pub use models::{
    Celebrity, CelebritySuggestion, Credentials, FanProfile, FollowedAt, FollowedCelebrity,
    NewCelebrity, NewFan,
};
