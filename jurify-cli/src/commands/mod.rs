//! Command implementations
//!
//! Each command takes the shared [`App`] context, drives the REST client and
//! local store, and prints through the renderer. Commands return
//! `anyhow::Result`; `main` displays whatever propagates.

use crate::client::{ApiClient, ApiError};
use crate::render::Renderer;
use jurify_common::Locale;
use sqlx::{Pool, Sqlite};

pub mod ask;
pub mod auth;
pub mod cache;
pub mod export;
pub mod free;
pub mod history;
pub mod stats;
pub mod xp;

/// Shared context assembled in `main`
pub struct App {
    pub db: Pool<Sqlite>,
    pub client: ApiClient,
    pub locale: Locale,
    /// Typewriter reveal for result sections (off when not a TTY)
    pub typewriter: bool,
    /// Response language code sent to the backend
    pub language: String,
    /// External command for voice dictation, from config.toml
    pub transcriber_command: Option<String>,
}

impl App {
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.locale, self.typewriter)
    }

    /// Translate a backend error for display, mapping 401 to the
    /// session-expired message
    pub fn describe_api_error(&self, error: ApiError) -> anyhow::Error {
        match error {
            ApiError::AuthRequired(_) => {
                anyhow::anyhow!("{}", self.locale.tr("auth.session_expired"))
            }
            other => other.into(),
        }
    }
}
