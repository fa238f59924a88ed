//! Backend cache maintenance: /cache/stats, /cache/clear, /cache/clear-expired

use super::{ApiClient, ApiError};
use jurify_common::api::{CacheCleared, CacheStats};

impl ApiClient {
    /// Fetch backend response-cache statistics (no auth required)
    pub async fn cache_stats(&self) -> Result<CacheStats, ApiError> {
        let response = self
            .http
            .get(self.url("/cache/stats"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Self::decode(response).await
    }

    /// Clear cached responses; `expired_only` limits to stale entries
    pub async fn clear_cache(&self, expired_only: bool) -> Result<CacheCleared, ApiError> {
        let path = if expired_only {
            "/cache/clear-expired"
        } else {
            "/cache/clear"
        };

        let builder = self.http.post(self.url(path));
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
