use crate::CacheSweepJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Registers background jobs, then starts them all at once.
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_cache_sweep(CacheSweepJob::new(purge).with_cancellation(token))
///     .start();
/// ```
pub struct JobRunner {
    cache_sweep: Option<CacheSweepJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { cache_sweep: None }
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweep = Some(job);
        self
    }

    /// Start all registered jobs. The handles finish once each job's
    /// cancellation token fires.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        if let Some(job) = self.cache_sweep {
            handles.push(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
