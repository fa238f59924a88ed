//! REST client for the JuriFy backend
//!
//! One `ApiClient` wraps the five endpoint groups (auth, process, free,
//! history, xp, cache). Endpoint methods live in the submodules; this module
//! holds the client core and the error mapping shared by all of them.

use jurify_common::api::ErrorResponse;
use std::time::Duration;
use thiserror::Error;

mod auth;
mod cache;
mod free;
mod history;
mod process;
mod xp;

const USER_AGENT: &str = concat!("jurify-cli/", env!("CARGO_PKG_VERSION"));

/// AI processing can take a while on a cold cache
const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Errors from backend calls
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from an authenticated endpoint (missing, expired, or bad token)
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// 429 from /free/process when the daily quota is exhausted
    #[error("{message}")]
    QuotaExceeded { message: String, reset_in_hours: f64 },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx backend response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// HTTP client bound to one backend instance
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to all subsequent authenticated calls
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// True if a token is loaded (the user appears logged in)
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add the Authorization header, failing early when no token is loaded
    fn authorized(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> {
        match &self.token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ApiError::AuthRequired("no token loaded".to_string())),
        }
    }

    /// Decode a success body, mapping JSON failures to ParseError
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// Map a non-2xx response to the matching ApiError variant
    async fn error_for(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body: ErrorResponse = match response.json().await {
            Ok(body) => body,
            Err(_) => ErrorResponse {
                error: "unrecognized error response".to_string(),
                limit_reached: false,
                reset_in_hours: None,
            },
        };

        match status {
            401 => ApiError::AuthRequired(body.error),
            404 => ApiError::NotFound(body.error),
            429 if body.limit_reached => ApiError::QuotaExceeded {
                message: body.error,
                reset_in_hours: body.reset_in_hours.unwrap_or(24.0),
            },
            _ => ApiError::Api(status, body.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/xp"), "http://localhost:5000/xp");
    }

    #[test]
    fn test_token_state() {
        let client = ApiClient::new("http://localhost:5000").unwrap();
        assert!(!client.has_token());

        let client = client.with_token(Some("jwt".to_string()));
        assert!(client.has_token());
    }

    #[test]
    fn test_authorized_without_token_fails() {
        let client = ApiClient::new("http://localhost:5000").unwrap();
        let request = client.http.get(client.url("/xp"));
        assert!(matches!(
            client.authorized(request),
            Err(ApiError::AuthRequired(_))
        ));
    }
}
