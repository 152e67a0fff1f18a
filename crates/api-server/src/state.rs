//! Application state

use std::sync::Arc;

use tt_core::task::InMemoryTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: InMemoryTaskStore,
}

impl AppState {
    /// Create a new AppState backed by a freshly seeded in-memory store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store: InMemoryTaskStore::new(),
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &InMemoryTaskStore {
        &self.inner.task_store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
