//! Data models shared by the collaborator services and the UI.

pub mod celebrity;
pub mod fan;

pub use celebrity::{
    parse_fanbase, Celebrity, CelebritySuggestion, NewCelebrity, SuggestionQuery,
    SuggestionResponse,
};
pub use fan::{Credentials, FanProfile, FollowRequest, FollowedAt, FollowedCelebrity, NewFan, TokenResponse};
