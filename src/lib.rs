//! Bookstall storefront server
//!
//! A small server-rendered bookstore: category listings, keyword search over
//! titles, book detail pages, and a session-scoped shopping cart carried in a
//! signed cookie.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    session_key: Key,
}

impl AppState {
    /// Build the shared state. The cookie-signing key is derived from
    /// `session.secret`, which must hold at least 32 bytes of material.
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let session_key = Key::derive_from(config.session.secret.as_bytes());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            session_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.session_key.clone()
    }
}
