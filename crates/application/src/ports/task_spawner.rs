use futures::future::BoxFuture;

pub type BackgroundTask = BoxFuture<'static, ()>;

/// Runs work after the response has been handed back to the client.
///
/// Implementations must keep spawned tasks alive until they complete, even
/// across server shutdown.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, name: &'static str, task: BackgroundTask);
}
