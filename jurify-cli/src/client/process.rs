//! Authenticated issue processing: POST /process

use super::{ApiClient, ApiError};
use jurify_common::api::{AdviceResponse, ProcessRequest};

impl ApiClient {
    /// Submit a legal issue through the authenticated endpoint
    ///
    /// The backend consults its response cache unless `skip_cache` is set,
    /// stores the result in the user's history, and awards XP.
    pub async fn process(&self, request: &ProcessRequest) -> Result<AdviceResponse, ApiError> {
        tracing::debug!(
            language = %request.language,
            summarize = request.summarize,
            skip_cache = request.skip_cache,
            "Submitting issue"
        );

        let builder = self.http.post(self.url("/process")).json(request);
        let response = self
            .authorized(builder)?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let advice: AdviceResponse = Self::decode(response).await?;
        tracing::info!(
            from_cache = advice.from_cache,
            xp_reward = advice.xp_reward,
            "Issue processed"
        );
        Ok(advice)
    }
}
