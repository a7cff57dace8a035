//! Background writer that coalesces board snapshots

use super::{BoardSink, UserKey};
use crate::types::Board;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct Snapshot {
    revision: u64,
    board: Board,
}

/// Fire-and-forget handle onto a background storage task.
///
/// Only the newest snapshot matters: if several boards are submitted while a write
/// is in flight, the writer skips straight to the last one.
#[derive(Debug)]
pub struct Persister {
    tx: watch::Sender<Option<Snapshot>>,
    task: JoinHandle<()>,
}

impl Persister {
    /// Spawn the writer on the current tokio runtime
    pub fn spawn(sink: Arc<dyn BoardSink>, user: UserKey) -> Self {
        let (tx, rx) = watch::channel(None);
        let task = tokio::spawn(write_loop(sink, user, rx));
        Self { tx, task }
    }

    /// Queue a board for storage. Never blocks.
    pub fn submit(&self, revision: u64, board: Board) {
        self.tx.send_replace(Some(Snapshot { revision, board }));
    }

    /// Stop accepting snapshots and wait for the last one to be written
    pub async fn shutdown(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            warn!(error = %e, "persistence task ended abnormally");
        }
    }
}

async fn write_loop(
    sink: Arc<dyn BoardSink>,
    user: UserKey,
    mut rx: watch::Receiver<Option<Snapshot>>,
) {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        let Some(snapshot) = snapshot else {
            continue;
        };
        match sink.store(&user, &snapshot.board).await {
            Ok(()) => info!(
                user = %user.key,
                revision = snapshot.revision,
                "board persisted"
            ),
            Err(e) => warn!(
                user = %user.key,
                revision = snapshot.revision,
                error = %e,
                "failed to persist board"
            ),
        }
    }
    debug!(user = %user.key, "persistence writer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReorderError, Result};
    use crate::persist::MemorySink;
    use crate::types::Container;
    use async_trait::async_trait;

    struct FailingSink;

    #[async_trait]
    impl BoardSink for FailingSink {
        async fn store(&self, _user: &UserKey, _board: &Board) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }

        async fn load(&self, user: &UserKey) -> Result<Board> {
            Err(ReorderError::NotStored {
                path: user.key.clone().into(),
            })
        }
    }

    #[tokio::test]
    async fn test_last_snapshot_wins() {
        let sink = MemorySink::new();
        let user = UserKey::from_email("ada@example.com");
        let persister = Persister::spawn(Arc::new(sink.clone()), user.clone());

        let mut board = Board::new();
        for n in 0..5 {
            board = board.with_container(Container::new(format!("container-{n}"), "c"));
            persister.submit(n + 1, board.clone());
        }
        persister.shutdown().await;

        assert_eq!(sink.get(&user.key), Some(board));
        assert!(sink.write_count() >= 1);
        assert!(sink.write_count() <= 5);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_writer() {
        let persister = Persister::spawn(
            Arc::new(FailingSink),
            UserKey::from_email("ada@example.com"),
        );
        persister.submit(1, Board::new());
        persister.submit(2, Board::new());
        // Returns cleanly: the error is logged, not propagated
        persister.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_without_submissions() {
        let sink = MemorySink::new();
        let persister = Persister::spawn(
            Arc::new(sink.clone()),
            UserKey::from_email("ada@example.com"),
        );
        persister.shutdown().await;
        assert_eq!(sink.write_count(), 0);
    }
}
