use crate::models::{Job, Worker};
use crate::services::source::{SourceClient, SourceError};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Point-in-time view of both collections
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub jobs: Arc<Vec<Job>>,
    pub workers: Arc<Vec<Worker>>,
}

/// Holds the last fetched job and worker collections
///
/// Readers get an `Arc` to an immutable snapshot; a refresh swaps in a new
/// one without disturbing queries still holding the old. A failed refresh
/// leaves the previous snapshot in place.
pub struct SnapshotRepository {
    source: Arc<SourceClient>,
    jobs: RwLock<Arc<Vec<Job>>>,
    workers: RwLock<Arc<Vec<Worker>>>,
    // Held while refilling empty snapshots so concurrent queries fetch once
    refill: Mutex<()>,
}

impl SnapshotRepository {
    /// Create an empty repository; call [`refresh`](Self::refresh) to load it
    pub fn new(source: Arc<SourceClient>) -> Self {
        Self::with_snapshot(source, Vec::new(), Vec::new())
    }

    /// Create a repository pre-loaded with the given collections
    pub fn with_snapshot(source: Arc<SourceClient>, jobs: Vec<Job>, workers: Vec<Worker>) -> Self {
        Self {
            source,
            jobs: RwLock::new(Arc::new(jobs)),
            workers: RwLock::new(Arc::new(workers)),
            refill: Mutex::new(()),
        }
    }

    pub async fn jobs(&self) -> Arc<Vec<Job>> {
        self.jobs.read().await.clone()
    }

    pub async fn workers(&self) -> Arc<Vec<Worker>> {
        self.workers.read().await.clone()
    }

    /// Refetch the job collection, returning its size
    pub async fn refresh_jobs(&self) -> Result<usize, SourceError> {
        let jobs = self.source.fetch_jobs().await?;
        let count = jobs.len();
        *self.jobs.write().await = Arc::new(jobs);
        tracing::info!("Job snapshot refreshed ({} jobs)", count);
        Ok(count)
    }

    /// Refetch the worker collection, returning its size
    pub async fn refresh_workers(&self) -> Result<usize, SourceError> {
        let workers = self.source.fetch_workers().await?;
        let count = workers.len();
        *self.workers.write().await = Arc::new(workers);
        tracing::info!("Worker snapshot refreshed ({} workers)", count);
        Ok(count)
    }

    /// Refetch both collections concurrently, returning (jobs, workers) sizes
    pub async fn refresh(&self) -> Result<(usize, usize), SourceError> {
        tokio::try_join!(self.refresh_jobs(), self.refresh_workers())
    }

    /// Current snapshot, refetching any collection that is empty
    ///
    /// Concurrent callers that find an empty collection wait on a single
    /// refill rather than each fetching it.
    pub async fn snapshot(&self) -> Result<Snapshot, SourceError> {
        let snapshot = self.current().await;
        if !snapshot.jobs.is_empty() && !snapshot.workers.is_empty() {
            return Ok(snapshot);
        }

        let _refill = self.refill.lock().await;

        // Another caller may have refilled while we waited
        if self.jobs.read().await.is_empty() {
            tracing::warn!("Job snapshot is empty, refetching");
            self.refresh_jobs().await?;
        }
        if self.workers.read().await.is_empty() {
            tracing::warn!("Worker snapshot is empty, refetching");
            self.refresh_workers().await?;
        }

        Ok(self.current().await)
    }

    async fn current(&self) -> Snapshot {
        Snapshot {
            jobs: self.jobs().await,
            workers: self.workers().await,
        }
    }
}
