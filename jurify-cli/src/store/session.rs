//! Session state access
//!
//! Read/write the token, user profile, free-tier client ID, and last
//! successful response from the settings table (key-value store).

use jurify_common::api::{AdviceResponse, UserProfile};
use jurify_common::{Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use uuid::Uuid;

/// Last successful AI response, kept so `export` works across invocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResponse {
    pub issue: String,
    pub language: String,
    /// ISO 8601, recorded client-side at render time
    pub received_at: String,
    pub advice: AdviceResponse,
}

/// Persist the bearer token after login
pub async fn save_token(db: &Pool<Sqlite>, token: &str) -> Result<()> {
    set_setting(db, "auth_token", token.to_string()).await
}

/// Load the stored bearer token, if logged in
pub async fn load_token(db: &Pool<Sqlite>) -> Result<Option<String>> {
    get_setting::<String>(db, "auth_token").await
}

/// Persist the logged-in user profile as JSON
pub async fn save_user(db: &Pool<Sqlite>, user: &UserProfile) -> Result<()> {
    let json = serde_json::to_string(user)
        .map_err(|e| Error::Internal(format!("Failed to encode user profile: {}", e)))?;
    set_setting(db, "user_profile", json).await
}

/// Load the stored user profile
pub async fn load_user(db: &Pool<Sqlite>) -> Result<Option<UserProfile>> {
    match get_setting::<String>(db, "user_profile").await? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid stored user profile: {}", e))),
        None => Ok(None),
    }
}

/// Delete token and profile on logout
pub async fn clear_session(db: &Pool<Sqlite>) -> Result<()> {
    sqlx::query("DELETE FROM settings WHERE key IN ('auth_token', 'user_profile')")
        .execute(db)
        .await?;
    Ok(())
}

/// Get the free-tier client ID, generating and persisting one on first use
pub async fn client_id(db: &Pool<Sqlite>) -> Result<String> {
    match get_setting::<String>(db, "free_client_id").await? {
        Some(id) => Ok(id),
        None => {
            let id = Uuid::new_v4().to_string();
            set_setting(db, "free_client_id", id.clone()).await?;
            tracing::debug!(client_id = %id, "Generated free-tier client ID");
            Ok(id)
        }
    }
}

/// Persist the latest successful response (overwrites the previous one)
pub async fn save_last_response(db: &Pool<Sqlite>, stored: &StoredResponse) -> Result<()> {
    let json = serde_json::to_string(stored)
        .map_err(|e| Error::Internal(format!("Failed to encode response: {}", e)))?;
    set_setting(db, "last_response", json).await
}

/// Load the latest successful response, if any
pub async fn load_last_response(db: &Pool<Sqlite>) -> Result<Option<StoredResponse>> {
    match get_setting::<String>(db, "last_response").await? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid stored response: {}", e))),
        None => Ok(None),
    }
}

/// Generic setting getter
///
/// Returns None if key doesn't exist in the store.
/// Parses value from string using FromStr trait.
pub async fn get_setting<T: FromStr>(db: &Pool<Sqlite>, key: &str) -> Result<Option<T>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(db)
        .await?;

    match value {
        Some(s) => match s.parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(Error::Config(format!(
                "Failed to parse setting '{}' value: {}",
                key, s
            ))),
        },
        None => Ok(None),
    }
}

/// Generic setting setter
///
/// Inserts or updates setting in the store.
pub async fn set_setting<T: ToString>(db: &Pool<Sqlite>, key: &str, value: T) -> Result<()> {
    let value_str = value.to_string();

    sqlx::query(
        r#"
        INSERT INTO settings (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(key)
    .bind(value_str)
    .execute(db)
    .await?;

    Ok(())
}
