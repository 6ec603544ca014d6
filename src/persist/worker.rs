//! The persistence worker.
//!
//! One background task drains a FIFO queue of snapshots. Each snapshot is
//! written on the blocking pool and the task waits for it before taking the
//! next, so at most one write is in flight.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::model::Config;

use super::{ConfigStore, PersistError, SaveOutcome};

struct SaveRequest {
    snapshot: Config,
    reply: oneshot::Sender<Result<SaveOutcome, PersistError>>,
}

/// Sender side of the worker queue.
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) lets the
/// worker finish the queued requests and stop.
#[derive(Debug)]
pub struct PersistHandle {
    tx: mpsc::UnboundedSender<SaveRequest>,
    task: JoinHandle<()>,
}

impl PersistHandle {
    /// Starts a worker that writes through `store`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S: ConfigStore>(store: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(Arc::new(store), rx));
        Self { tx, task }
    }

    /// Queues a snapshot for writing.
    ///
    /// The snapshot is an independent copy; later edits to the caller's
    /// `Config` do not affect it. The returned ticket resolves once this
    /// particular request has been handled.
    pub fn save(&self, snapshot: Config) -> SaveTicket {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(SaveRequest { snapshot, reply }).is_err() {
            tracing::warn!("save requested after the persistence worker stopped");
        }
        SaveTicket { rx }
    }

    /// Closes the queue and waits for pending writes to finish.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "persistence worker panicked");
        }
    }
}

/// Completion signal for one save request.
#[derive(Debug)]
#[must_use = "a ticket reports whether the save succeeded"]
pub struct SaveTicket {
    rx: oneshot::Receiver<Result<SaveOutcome, PersistError>>,
}

impl SaveTicket {
    /// Waits for the request to be written.
    ///
    /// # Errors
    ///
    /// Returns the write or backup failure, or [`PersistError::WorkerGone`]
    /// if the worker stopped without answering.
    pub async fn wait(self) -> Result<SaveOutcome, PersistError> {
        self.rx.await.map_err(|_| PersistError::WorkerGone)?
    }
}

async fn run<S: ConfigStore>(store: Arc<S>, mut rx: mpsc::UnboundedReceiver<SaveRequest>) {
    tracing::debug!("persistence worker started");

    while let Some(SaveRequest { snapshot, reply }) = rx.recv().await {
        let store = Arc::clone(&store);
        let result = tokio::task::spawn_blocking(move || store.write(&snapshot))
            .await
            .unwrap_or_else(|e| Err(PersistError::Task(e)));

        match &result {
            Ok(outcome) => tracing::info!(
                path = %outcome.path.display(),
                bytes = outcome.bytes,
                backup = ?outcome.backup,
                "configuration saved"
            ),
            Err(e) => tracing::error!(error = %e, "save failed"),
        }

        if reply.send(result).is_err() {
            tracing::debug!("save result dropped: requester no longer waiting");
        }
    }

    tracing::debug!("persistence worker stopped");
}
