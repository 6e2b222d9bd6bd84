//! Effect coordination for the user-management feature.
//!
//! Intents arrive on a bus, the [`coordinator::EffectCoordinator`] runs one
//! handler per intent kind (newest occurrence wins), talks to the user API
//! and publishes whole-value updates into the state store.

pub mod api;
pub mod bus;
pub mod config;
pub mod coordinator;
pub mod model;
pub mod mvi;
pub mod notify;
pub mod store;
pub mod telemetry;
