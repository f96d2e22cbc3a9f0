//! In-memory sync adapter.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{RemoteSync, SyncError, SyncEvent, SyncKind, SyncOutcome};
use crate::core::Difficulty;

/// Records every report instead of sending it anywhere.
///
/// Lets tests observe what a session reports. Can be switched to fail
/// every call to exercise error paths.
#[derive(Default)]
pub struct RecordingSync {
    events: Mutex<Vec<SyncEvent>>,
    failing: AtomicBool,
}

impl RecordingSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that rejects every report.
    #[must_use]
    pub fn failing() -> Self {
        let sync = Self::default();
        sync.set_failing(true);
        sync
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Reports accepted so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn count(&self, kind: SyncKind) -> usize {
        self.events().iter().filter(|e| e.kind == kind).count()
    }

    fn record(
        &self,
        kind: SyncKind,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SyncError::Unavailable("recording sync set to fail".into()));
        }

        let event = SyncEvent {
            kind,
            user: user.to_string(),
            difficulty,
            word: word.to_string(),
        };
        let mut events = self
            .events
            .lock()
            .map_err(|_| SyncError::Unavailable("event log poisoned".into()))?;
        events.push(event);

        Ok(SyncOutcome {
            matched: 1,
            modified: 1,
            message: None,
        })
    }
}

#[async_trait]
impl RemoteSync for RecordingSync {
    fn name(&self) -> &str {
        "recording"
    }

    async fn report_hint(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError> {
        self.record(SyncKind::Hint, user, difficulty, word)
    }

    async fn report_score(
        &self,
        user: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<SyncOutcome, SyncError> {
        self.record(SyncKind::Score, user, difficulty, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_reports_in_order() {
        let sync = RecordingSync::new();
        sync.report_hint("ana", Difficulty::Easy, "cat").await.unwrap();
        sync.report_score("ana", Difficulty::Easy, "cat").await.unwrap();

        let events = sync.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, SyncKind::Hint);
        assert_eq!(events[1].kind, SyncKind::Score);
        assert_eq!(sync.count(SyncKind::Score), 1);
    }

    #[tokio::test]
    async fn failing_mode_records_nothing() {
        let sync = RecordingSync::failing();
        let err = sync
            .report_score("ana", Difficulty::Hard, "language")
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Unavailable(_)));
        assert!(sync.events().is_empty());
    }

    #[tokio::test]
    async fn deliver_dispatches_by_kind() {
        let sync = RecordingSync::new();
        let event = SyncEvent {
            kind: SyncKind::Score,
            user: "ana".into(),
            difficulty: Difficulty::Medium,
            word: "garden".into(),
        };

        sync.deliver(&event).await.unwrap();
        assert_eq!(sync.events(), vec![event]);
    }
}
