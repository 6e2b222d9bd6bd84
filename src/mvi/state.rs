//! Base trait for store state.

use crate::model::AppState;

/// Marker trait for state trees held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

impl StoreState for AppState {}
