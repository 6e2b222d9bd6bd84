use serde::{Deserialize, Serialize};

pub type GroupId = u64;

/// Membership entry of a user inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUser {
    pub name: String,
    /// Display alias; falls back to the name on the client when empty.
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub users: Vec<GroupUser>,
}

impl Group {
    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GroupUser> {
        self.users.iter().filter(move |u| u.name == name)
    }
}

/// All groups owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsWithOwner {
    pub owner: String,
    #[serde(default)]
    pub owner_avatar: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}
