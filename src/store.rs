//! State store seam and the in-memory store.
//!
//! The coordinator only ever reads snapshots and submits whole-value
//! updates; the store is the single point where writes are serialized.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::AppState;
use crate::mvi::{AppReducer, Reducer, StateUpdate};

pub trait StateStore: Send + Sync + 'static {
    /// Fresh snapshot of the current state. Never aliases live state.
    fn read(&self) -> AppState;

    /// Submit a broadcast. One-way: callers must not rely on it being
    /// visible to a later `read` unless they read again.
    fn dispatch(&self, update: StateUpdate);
}

/// Thread-safe state container with interior mutability.
///
/// Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<AppState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }
}

impl StateStore for InMemoryStore {
    fn read(&self) -> AppState {
        self.inner.read().clone()
    }

    fn dispatch(&self, update: StateUpdate) {
        tracing::debug!(update = update.name(), "Dispatching state update");
        let mut guard = self.inner.write();
        let current = std::mem::take(&mut *guard);
        *guard = AppReducer::reduce(current, update);
    }
}

impl<T: StateStore> StateStore for Arc<T> {
    fn read(&self) -> AppState {
        (**self).read()
    }

    fn dispatch(&self, update: StateUpdate) {
        (**self).dispatch(update)
    }
}
