//! Remote progress sync
//!
//! Hint and score reports are mirrored to a backend service. Reporting is
//! fire-and-forget: a [`PuzzleSession`](crate::puzzle::PuzzleSession) pushes
//! [`SyncEvent`]s onto a channel and a background task delivers them
//! through a [`RemoteSync`] adapter, logging failures without retrying.

pub mod error;
pub mod http;
pub mod mock;
mod worker;

use crate::core::Difficulty;
use async_trait::async_trait;
use serde::Deserialize;

pub use error::SyncError;
pub use http::HttpSync;
pub use mock::RecordingSync;
pub use worker::{SyncSender, WorkerReport, spawn_worker, sync_channel};

/// What a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Hint,
    Score,
}

/// One pending report for the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEvent {
    pub kind: SyncKind,
    pub user: String,
    pub difficulty: Difficulty,
    pub word: String,
}

/// Backend acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SyncOutcome {
    #[serde(default)]
    pub matched: u64,
    #[serde(default)]
    pub modified: u64,
    #[serde(default)]
    pub message: Option<String>,
}

impl SyncOutcome {
    /// Whether the backend actually changed anything
    ///
    /// Score reports for words the backend already counts as solved come
    /// back unmodified.
    #[must_use]
    pub const fn was_applied(&self) -> bool {
        self.modified > 0
    }
}

/// Adapter to the score/hint tracking service
#[async_trait]
pub trait RemoteSync: Send + Sync {
    /// Human-readable adapter name (e.g., "http", "recording")
    fn name(&self) -> &str;

    /// Report that `user` used a hint on `word`
    async fn report_hint(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError>;

    /// Report that `user` solved `word` for the first time
    async fn report_score(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError>;

    /// Deliver one event to the matching report call
    async fn deliver(&self, event: &SyncEvent) -> Result<SyncOutcome, SyncError> {
        match event.kind {
            SyncKind::Hint => {
                self.report_hint(&event.user, event.difficulty, &event.word)
                    .await
            }
            SyncKind::Score => {
                self.report_score(&event.user, event.difficulty, &event.word)
                    .await
            }
        }
    }
}
