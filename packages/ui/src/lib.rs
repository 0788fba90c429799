//! This crate contains all shared UI for the workspace.
//!
//! Page state and flows live in [`controllers`] and are plain Rust; the
//! components in [`views`] only render that state and forward events. Platform
//! packages supply routing through `EventHandler` props.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod controllers;
pub use controllers::{Destination, ViewError};

mod session_store;
pub use session_store::{make_session_store, PlatformStore, Session};

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, LogoutButton};

mod services;
pub use services::{load_config, use_backend, use_config, ServicesProvider};

mod theme_toggle;
pub use theme_toggle::{apply_theme, ThemeToggle};

mod download;
pub use download::save_document;

mod navbar;
pub use navbar::Navbar;

pub mod views;
