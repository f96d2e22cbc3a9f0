//! HTTP adapter for the score/hint tracking backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use super::{RemoteSync, SyncError, SyncOutcome};
use crate::core::Difficulty;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const HINT_PATH: &str = "updatehints";
const SCORE_PATH: &str = "increment-score";

/// Reports progress with JSON POSTs to the backend.
pub struct HttpSync {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSync {
    /// Create an adapter for `base_url` (trailing slashes are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SyncError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &ReportRequest<'_>) -> Result<SyncOutcome, SyncError> {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SyncError::Timeout(self.timeout_secs)
                } else {
                    SyncError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status,
                message: body,
            });
        }

        response
            .json::<SyncOutcome>()
            .await
            .map_err(|e| SyncError::InvalidResponse(format!("failed to parse response: {e}")))
    }
}

#[derive(Serialize)]
struct ReportRequest<'a> {
    email: &'a str,
    difficulty: Difficulty,
    word: &'a str,
}

#[async_trait]
impl RemoteSync for HttpSync {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(backend = %self.base_url))]
    async fn report_hint(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError> {
        let body = ReportRequest {
            email: user,
            difficulty,
            word,
        };
        self.post(HINT_PATH, &body).await
    }

    #[instrument(skip(self), fields(backend = %self.base_url))]
    async fn report_score(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError> {
        let body = ReportRequest {
            email: user,
            difficulty,
            word,
        };
        self.post(SCORE_PATH, &body).await
    }
}
