use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::{RwLock, watch};

use crate::loader::{self, DatasetSource, LoadError};
use crate::types::Dataset;

/// Outcome of waiting on the readiness signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// Loading settled before the deadline, successfully or not.
    Settled,
    /// The deadline passed with the load still in flight.
    TimedOut,
}

/// Holds the published dataset and broadcasts when loading has settled.
///
/// A published dataset is immutable; reloads swap the Arc, so readers
/// keep whatever snapshot they already hold.
pub struct DatasetStore {
    dataset: RwLock<Arc<Dataset>>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
    load_failed: AtomicBool,
}

impl DatasetStore {
    pub fn new() -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            dataset: RwLock::new(Arc::new(Dataset::new())),
            ready_tx,
            ready_rx,
            load_failed: AtomicBool::new(false),
        }
    }

    /// Load (or reload) from the source and publish the outcome.
    ///
    /// A failed load publishes an empty dataset and records the failure,
    /// but still settles the readiness signal so waiters stop blocking on
    /// a load that already finished.
    pub async fn load(&self, source: &DatasetSource) -> Result<usize, LoadError> {
        match loader::load(source).await {
            Ok(dataset) => {
                let count = dataset.len();
                *self.dataset.write().await = Arc::new(dataset);
                self.load_failed.store(false, Ordering::Release);
                let _ = self.ready_tx.send(true);
                Ok(count)
            }
            Err(err) => {
                *self.dataset.write().await = Arc::new(Dataset::new());
                self.load_failed.store(true, Ordering::Release);
                let _ = self.ready_tx.send(true);
                Err(err)
            }
        }
    }

    /// Current dataset snapshot, cheap to clone and safe to hold across
    /// awaits.
    pub async fn snapshot(&self) -> Arc<Dataset> {
        self.dataset.read().await.clone()
    }

    /// True once a load attempt has settled.
    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// True when the most recent load attempt failed.
    pub fn load_failed(&self) -> bool {
        self.load_failed.load(Ordering::Acquire)
    }

    /// Wait until loading settles or the timeout passes, whichever is
    /// first.
    pub async fn wait_ready(&self, timeout: Duration) -> ReadyOutcome {
        let mut rx = self.ready_rx.clone();
        match tokio::time::timeout(timeout, rx.wait_for(|ready| *ready)).await {
            Ok(_) => ReadyOutcome::Settled,
            Err(_) => ReadyOutcome::TimedOut,
        }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::search::search;

    fn source_for(json: &str) -> (tempfile::NamedTempFile, DatasetSource) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        let source = DatasetSource::File(file.path().to_path_buf());
        (file, source)
    }

    #[tokio::test]
    async fn successful_load_settles_the_signal() {
        let (_file, source) = source_for(r#"{"汝": {"phonetic": "ru2"}}"#);
        let store = DatasetStore::new();
        assert!(!store.is_ready());

        let count = store.load(&source).await.unwrap();
        assert_eq!(count, 1);
        assert!(store.is_ready());
        assert!(!store.load_failed());
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_load_settles_with_an_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatasetSource::File(dir.path().join("absent.json"));
        let store = DatasetStore::new();

        let err = store.load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(store.is_ready());
        assert!(store.load_failed());

        // Queries against the failed store come back empty rather than
        // erroring.
        let snapshot = store.snapshot().await;
        assert!(search(&snapshot, "汝").is_empty());
    }

    #[tokio::test]
    async fn wait_ready_times_out_while_nothing_has_loaded() {
        let store = DatasetStore::new();
        let outcome = store.wait_ready(Duration::from_millis(20)).await;
        assert_eq!(outcome, ReadyOutcome::TimedOut);
    }

    #[tokio::test]
    async fn wait_ready_settles_once_a_load_lands() {
        let (_file, source) = source_for(r#"{"汝": {}}"#);
        let store = Arc::new(DatasetStore::new());

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move { store.wait_ready(Duration::from_secs(5)).await })
        };
        store.load(&source).await.unwrap();

        assert_eq!(waiter.await.unwrap(), ReadyOutcome::Settled);
    }

    #[tokio::test]
    async fn wait_ready_settles_when_a_load_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatasetSource::File(dir.path().join("absent.json"));
        let store = Arc::new(DatasetStore::new());

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move { store.wait_ready(Duration::from_secs(5)).await })
        };
        store.load(&source).await.unwrap_err();

        // A failed load settles the signal; waiters do not ride out the
        // timeout.
        assert_eq!(waiter.await.unwrap(), ReadyOutcome::Settled);
    }

    #[tokio::test]
    async fn reload_swaps_the_snapshot_without_invalidating_old_ones() {
        let (_first, first) = source_for(r#"{"汝": {}}"#);
        let (_second, second) = source_for(r#"{"汝": {}, "城": {}}"#);
        let store = DatasetStore::new();

        store.load(&first).await.unwrap();
        let old = store.snapshot().await;

        store.load(&second).await.unwrap();
        assert_eq!(old.len(), 1);
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn reload_after_failure_clears_the_failed_flag() {
        let dir = tempfile::tempdir().unwrap();
        let missing = DatasetSource::File(dir.path().join("absent.json"));
        let (_file, good) = source_for(r#"{"汝": {}}"#);
        let store = DatasetStore::new();

        store.load(&missing).await.unwrap_err();
        assert!(store.load_failed());

        store.load(&good).await.unwrap();
        assert!(!store.load_failed());
        assert_eq!(store.snapshot().await.len(), 1);
    }
}
