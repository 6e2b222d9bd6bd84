//! Model-View-Intent primitives for the user feature.
//!
//! # Data flow
//!
//! ```text
//! UserIntent ──→ EffectCoordinator ──→ StateUpdate ──→ AppReducer ──→ AppState
//!                      │                                                │
//!                      └────────────────── read() ──────────────────────┘
//! ```
//!
//! - **UserIntent**: a request from the UI, handled by the coordinator
//! - **StateUpdate**: a named broadcast produced by a handler
//! - **Reducer**: pure function applying an update to the state tree

mod intent;
mod reducer;
mod state;
mod update;

pub use intent::{IntentKind, UserIntent};
pub use reducer::{AppReducer, Reducer};
pub use state::StoreState;
pub use update::StateUpdate;
