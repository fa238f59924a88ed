//! Gamification endpoint: GET /xp

use super::{ApiClient, ApiError};
use jurify_common::api::XpSummary;

impl ApiClient {
    /// Fetch the user's XP total, level, and badge set
    pub async fn xp(&self) -> Result<XpSummary, ApiError> {
        let builder = self.http.get(self.url("/xp"));
        let response = self
            .authorized(builder)?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Self::decode(response).await
    }
}
