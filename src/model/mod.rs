//! Data carried between the API, the coordinator and the store.

mod group;
mod state;
mod user;

pub use group::{Group, GroupId, GroupUser, GroupsWithOwner};
pub use state::{AppState, GroupState, UserState};
pub use user::{UserProfile, UserRecord};
