//! Free tier endpoint group: /free/status, /free/process
//!
//! Anonymous usage is identified by a locally generated client ID and capped
//! by a server-enforced daily quota.

use super::{ApiClient, ApiError};
use jurify_common::api::{AdviceResponse, FreeProcessRequest, FreeStatus, FreeStatusRequest};

impl ApiClient {
    /// Check remaining free-tier quota for a client ID
    pub async fn free_status(&self, client_id: &str) -> Result<FreeStatus, ApiError> {
        let body = FreeStatusRequest {
            client_id: client_id.to_string(),
        };

        let response = self
            .http
            .post(self.url("/free/status"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Self::decode(response).await
    }

    /// Submit a legal issue on the free tier
    ///
    /// Returns `ApiError::QuotaExceeded` when the daily limit is spent.
    pub async fn free_process(
        &self,
        request: &FreeProcessRequest,
    ) -> Result<AdviceResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/free/process"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let advice: AdviceResponse = Self::decode(response).await?;
        tracing::info!(
            from_cache = advice.from_cache,
            queries_remaining = advice.queries_remaining,
            "Free-tier issue processed"
        );
        Ok(advice)
    }
}
