//! Intents emitted by the UI for the coordinator to handle.

use std::fmt;

use crate::model::GroupId;

/// Tag of a [`UserIntent`]. Superseding is scoped to one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    ApiErrorReceived,
    Update,
    AliasUpdate,
}

impl IntentKind {
    pub const ALL: [IntentKind; 3] = [
        IntentKind::ApiErrorReceived,
        IntentKind::Update,
        IntentKind::AliasUpdate,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            IntentKind::ApiErrorReceived => 0,
            IntentKind::Update => 1,
            IntentKind::AliasUpdate => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntentKind::ApiErrorReceived => "userApiErrorReceived",
            IntentKind::Update => "userUpdate",
            IntentKind::AliasUpdate => "userAliasUpdate",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// An API call elsewhere failed; show its message.
    ApiErrorReceived { error: String },
    /// Refresh the profile of `name`.
    Update { name: String },
    /// Change `target_user`'s alias. `group_id` selects the focused group.
    AliasUpdate {
        target_user: String,
        alias: String,
        group_id: GroupId,
    },
}

impl UserIntent {
    pub fn api_error(error: impl fmt::Display) -> Self {
        UserIntent::ApiErrorReceived {
            error: error.to_string(),
        }
    }

    pub fn update(name: impl Into<String>) -> Self {
        UserIntent::Update { name: name.into() }
    }

    pub fn alias_update(
        target_user: impl Into<String>,
        alias: impl Into<String>,
        group_id: GroupId,
    ) -> Self {
        UserIntent::AliasUpdate {
            target_user: target_user.into(),
            alias: alias.into(),
            group_id,
        }
    }

    pub fn kind(&self) -> IntentKind {
        match self {
            UserIntent::ApiErrorReceived { .. } => IntentKind::ApiErrorReceived,
            UserIntent::Update { .. } => IntentKind::Update,
            UserIntent::AliasUpdate { .. } => IntentKind::AliasUpdate,
        }
    }
}
