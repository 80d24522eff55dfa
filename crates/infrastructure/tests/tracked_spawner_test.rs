use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tezcache_application::ports::TaskSpawner;
use tezcache_infrastructure::TrackedTaskSpawner;

#[tokio::test]
async fn test_shutdown_waits_for_pending_tasks() {
    let spawner = TrackedTaskSpawner::new();
    let done = Arc::new(AtomicUsize::new(0));

    for i in 0..5u64 {
        let done = Arc::clone(&done);
        spawner.spawn(
            "test_task",
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(10 * i)).await;
                done.fetch_add(1, Ordering::SeqCst);
            }),
        );
    }

    spawner.shutdown().await;

    assert_eq!(done.load(Ordering::SeqCst), 5);
    assert_eq!(spawner.pending(), 0);
}

#[tokio::test]
async fn test_shutdown_with_no_tasks_returns_immediately() {
    let spawner = TrackedTaskSpawner::new();

    tokio::time::timeout(Duration::from_secs(1), spawner.shutdown())
        .await
        .expect("shutdown should not block without tasks");
}

#[tokio::test]
async fn test_clones_share_one_tracker() {
    let spawner = TrackedTaskSpawner::new();
    let handle = spawner.clone();
    let done = Arc::new(AtomicUsize::new(0));

    let flag = Arc::clone(&done);
    handle.spawn(
        "cache_write",
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.fetch_add(1, Ordering::SeqCst);
        }),
    );

    spawner.shutdown().await;

    assert_eq!(done.load(Ordering::SeqCst), 1);
}
