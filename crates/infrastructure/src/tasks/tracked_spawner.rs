use tezcache_application::ports::{BackgroundTask, TaskSpawner};
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// Spawns post-response work on the tokio runtime and keeps track of it, so
/// that shutdown can wait for every pending cache write to land.
#[derive(Clone, Default)]
pub struct TrackedTaskSpawner {
    tracker: TaskTracker,
}

impl TrackedTaskSpawner {
    pub fn new() -> Self {
        Self {
            tracker: TaskTracker::new(),
        }
    }

    pub fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    /// Number of tasks still running.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Close the tracker and wait for every tracked task to finish.
    ///
    /// Tasks spawned after this call are still tracked and awaited.
    pub async fn shutdown(&self) {
        let pending = self.tracker.len();
        info!(pending, "Draining background tasks");

        self.tracker.close();
        self.tracker.wait().await;

        info!("Background tasks drained");
    }
}

impl TaskSpawner for TrackedTaskSpawner {
    fn spawn(&self, name: &'static str, task: BackgroundTask) {
        debug!(task = name, "Spawning background task");
        self.tracker.spawn(task);
    }
}
