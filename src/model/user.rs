use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public profile of a user as published into the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub id: u64,
    #[serde(default)]
    pub thumbnail: String,
}

/// User as returned by the API, including fields the store never sees
/// (timezone, currency, theme, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub id: u64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Keeps `name`, `avatar`, `id` and `thumbnail`; drops everything else.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name,
            avatar: self.avatar,
            id: self.id,
            thumbnail: self.thumbnail,
        }
    }
}
