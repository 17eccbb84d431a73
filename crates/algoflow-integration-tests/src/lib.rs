//! Shared fixtures for the end-to-end scenarios under `tests/`.

use std::sync::Arc;
use std::time::Duration;

use algoflow_core::{MemoryHistory, NavigationController, TopicRegistry};

/// The standard registry, shared.
pub fn registry() -> Arc<TopicRegistry> {
    match algoflow_topics::registry() {
        Ok(registry) => Arc::new(registry),
        Err(err) => panic!("standard registry is invalid: {err}"),
    }
}

/// A controller over the standard registry with an empty in-memory history.
pub fn controller() -> NavigationController<MemoryHistory> {
    NavigationController::new(registry(), MemoryHistory::new())
}

/// Milliseconds of session time.
pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}
