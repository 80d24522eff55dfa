pub mod tracked_spawner;

pub use tracked_spawner::TrackedTaskSpawner;
