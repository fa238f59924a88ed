//! Shared API request/response types
//!
//! Types for the five endpoint groups of the JuriFy backend:
//! auth, process, free tier, history, XP, and cache maintenance.
//!
//! Field names and optionality follow the backend JSON exactly; fields the
//! backend omits on some paths (e.g. `history_id` on free-tier responses)
//! are `Option` or defaulted.

use serde::{Deserialize, Serialize};

// ========================================
// Authentication Types
// ========================================

/// Request body for POST /auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from POST /auth/register (201 Created)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// Request body for POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// JWT bearer token, valid for 7 days server-side
    pub token: String,
    pub user: UserProfile,
}

/// Logged-in user identity, stored locally after login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// ========================================
// Issue Processing Types
// ========================================

/// Request body for POST /process (authenticated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub issue: String,
    pub language: String,
    pub summarize: bool,
    /// True when the issue text came from voice dictation (bonus XP)
    pub voice_used: bool,
    /// Force a fresh AI call, bypassing the backend response cache
    pub skip_cache: bool,
}

/// Request body for POST /free/process (anonymous)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeProcessRequest {
    pub client_id: String,
    pub issue: String,
    pub language: String,
    pub summarize: bool,
}

/// Structured AI result from /process or /free/process
///
/// The four sections are always present on success. The trailing metadata
/// differs by path: authenticated responses carry `history_id` and
/// `xp_reward`, free-tier responses carry `queries_remaining` and
/// `daily_limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub rights: String,
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub docs: String,
    #[serde(default)]
    pub notice: String,
    /// True when the backend served this from its response cache
    #[serde(default)]
    pub from_cache: bool,
    pub history_id: Option<i64>,
    pub xp_reward: Option<i64>,
    #[serde(default)]
    pub free_tier: bool,
    pub queries_remaining: Option<i64>,
    pub daily_limit: Option<i64>,
}

// ========================================
// Free Tier Types
// ========================================

/// Request body for POST /free/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeStatusRequest {
    pub client_id: String,
}

/// Response from POST /free/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeStatus {
    pub daily_limit: i64,
    pub used: i64,
    pub remaining: i64,
    /// Hours until the daily quota resets (rounded server-side)
    pub reset_in_hours: f64,
}

// ========================================
// History Types
// ========================================

/// One row of the user's query history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: i64,
    pub user_id: i64,
    pub issue: String,
    #[serde(default)]
    pub rights: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub xp_reward: i64,
    /// ISO 8601 timestamp assigned server-side
    pub created_at: String,
}

fn default_language() -> String {
    "en".to_string()
}

// ========================================
// XP / Gamification Types
// ========================================

/// Response from GET /xp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpSummary {
    pub total_xp: i64,
    /// Level = total_xp / 100
    pub level: i64,
    /// XP accumulated within the current level (total_xp % 100)
    pub xp_in_level: i64,
    pub query_count: i64,
    pub badges: Badges,
}

/// Badge set keyed by query-count thresholds (3/10/25/50)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Badges {
    pub bronze: bool,
    pub silver: bool,
    pub gold: bool,
    pub diamond: bool,
}

// ========================================
// Cache Maintenance Types
// ========================================

/// Response from GET /cache/stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: i64,
    pub total_hits: i64,
    pub expired_entries: i64,
    pub expiry_hours: i64,
}

/// Response from POST /cache/clear and /cache/clear-expired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheCleared {
    pub message: String,
    pub deleted: i64,
}

// ========================================
// Generic Response Types
// ========================================

/// Plain `{message}` acknowledgement (e.g. history delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the backend on any non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Set on 429 from /free/process
    #[serde(default)]
    pub limit_reached: bool,
    pub reset_in_hours: Option<f64>,
}

// ========================================
// Tests
// ========================================
