//! Auth endpoint group: /auth/register, /auth/login

use super::{ApiClient, ApiError};
use jurify_common::api::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

impl ApiClient {
    /// Register a new account
    ///
    /// 409 (email already registered) surfaces as `ApiError::Api(409, ..)`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Self::decode(response).await
    }

    /// Log in and obtain a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let login: LoginResponse = Self::decode(response).await?;
        tracing::info!(user = %login.user.name, "Login successful");
        Ok(login)
    }
}
