//! Background delivery of sync events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{RemoteSync, SyncEvent};

/// Sending half handed to a puzzle session.
pub type SyncSender = mpsc::UnboundedSender<SyncEvent>;

/// Create the channel a session reports into.
#[must_use]
pub fn sync_channel() -> (SyncSender, mpsc::UnboundedReceiver<SyncEvent>) {
    mpsc::unbounded_channel()
}

/// Delivery totals returned when the worker stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Deliver events until every sender has been dropped.
///
/// Failures are logged and counted; events are never retried.
pub fn spawn_worker(
    adapter: Arc<dyn RemoteSync>,
    mut events: mpsc::UnboundedReceiver<SyncEvent>,
) -> JoinHandle<WorkerReport> {
    tokio::spawn(async move {
        let mut report = WorkerReport::default();

        while let Some(event) = events.recv().await {
            match adapter.deliver(&event).await {
                Ok(outcome) => {
                    report.delivered += 1;
                    debug!(
                        adapter = adapter.name(),
                        kind = ?event.kind,
                        word = %event.word,
                        applied = outcome.was_applied(),
                        "sync delivered"
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        adapter = adapter.name(),
                        kind = ?event.kind,
                        word = %event.word,
                        error = %e,
                        "sync failed"
                    );
                }
            }
        }

        debug!(?report, "sync worker stopped");
        report
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::sync::{RecordingSync, SyncKind};

    fn event(kind: SyncKind, word: &str) -> SyncEvent {
        SyncEvent {
            kind,
            user: "ana".into(),
            difficulty: Difficulty::Easy,
            word: word.into(),
        }
    }

    #[tokio::test]
    async fn delivers_until_senders_dropped() {
        let recorder = Arc::new(RecordingSync::new());
        let (tx, rx) = sync_channel();
        let handle = spawn_worker(recorder.clone(), rx);

        tx.send(event(SyncKind::Hint, "cat")).unwrap();
        tx.send(event(SyncKind::Score, "cat")).unwrap();
        drop(tx);

        let report = handle.await.unwrap();
        assert_eq!(report.delivered, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(recorder.count(SyncKind::Hint), 1);
        assert_eq!(recorder.count(SyncKind::Score), 1);
    }

    #[tokio::test]
    async fn failures_are_counted_not_retried() {
        let recorder = Arc::new(RecordingSync::failing());
        let (tx, rx) = sync_channel();
        let handle = spawn_worker(recorder.clone(), rx);

        tx.send(event(SyncKind::Score, "dog")).unwrap();
        drop(tx);

        let report = handle.await.unwrap();
        assert_eq!(report.delivered, 0);
        assert_eq!(report.failed, 1);
        assert!(recorder.events().is_empty());
    }
}
