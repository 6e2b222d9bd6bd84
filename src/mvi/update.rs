//! Named broadcasts a handler submits to the store.

use crate::model::{Group, GroupsWithOwner, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    UserDataReceived(UserProfile),
    /// Reset the user slice to its default.
    UserClear,
    GroupsReceived(Vec<GroupsWithOwner>),
    GroupReceived(Option<Group>),
}

impl StateUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            StateUpdate::UserDataReceived(_) => "userDataReceived",
            StateUpdate::UserClear => "userClear",
            StateUpdate::GroupsReceived(_) => "groupsReceived",
            StateUpdate::GroupReceived(_) => "groupReceived",
        }
    }
}
