use serde::{Deserialize, Serialize};

use super::{Group, GroupsWithOwner, UserProfile};

/// Snapshot of the application state tree the coordinator cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub user: UserState,
    pub group: GroupState,
}

/// User slice. `profile` is `None` until a refresh succeeds or after a clear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserState {
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupState {
    pub groups: Vec<GroupsWithOwner>,
    /// Focused group, if any.
    pub group: Option<Group>,
}
