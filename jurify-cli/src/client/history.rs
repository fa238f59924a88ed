//! History endpoint group: GET/DELETE /history

use super::{ApiClient, ApiError};
use jurify_common::api::{HistoryItem, MessageResponse};

impl ApiClient {
    /// List the user's query history, newest first
    ///
    /// `search` filters server-side on issue text (case-insensitive).
    pub async fn history(&self, search: Option<&str>) -> Result<Vec<HistoryItem>, ApiError> {
        let mut builder = self.http.get(self.url("/history"));
        if let Some(term) = search {
            builder = builder.query(&[("search", term)]);
        }

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

    /// Fetch one history item by id
    pub async fn history_item(&self, id: i64) -> Result<HistoryItem, ApiError> {
        let builder = self.http.get(self.url(&format!("/history/{}", id)));
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

    /// Delete one history item by id
    pub async fn delete_history_item(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let builder = self.http.delete(self.url(&format!("/history/{}", id)));
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
