//! # JuriFy CLI
//!
//! Terminal client for the JuriFy legal-assistance backend:
//! - REST client over the five endpoint groups (auth, process, free,
//!   history, xp, cache)
//! - Local SQLite store for session state and usage analytics
//! - Result rendering with typewriter reveal and cache indicator
//! - Voice dictation, PDF export, locale-driven labels

pub mod client;
pub mod commands;
pub mod pdf;
pub mod render;
pub mod store;
pub mod voice;
