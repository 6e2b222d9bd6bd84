//! Shared test doubles and fixtures.

#![allow(dead_code)]

pub mod fake_api;
pub mod mock_api;

use parking_lot::Mutex;
use std::sync::Arc;
use user_effects::model::{AppState, Group, GroupId, GroupUser, GroupsWithOwner};
use user_effects::mvi::StateUpdate;
use user_effects::notify::Notifier;
use user_effects::store::{InMemoryStore, StateStore};

/// In-memory store that also records every dispatched update.
#[derive(Default)]
pub struct RecordingStore {
    store: InMemoryStore,
    updates: Mutex<Vec<StateUpdate>>,
}

impl RecordingStore {
    pub fn with_state(state: AppState) -> Arc<Self> {
        Arc::new(Self {
            store: InMemoryStore::with_state(state),
            updates: Mutex::new(Vec::new()),
        })
    }

    pub fn updates(&self) -> Vec<StateUpdate> {
        self.updates.lock().clone()
    }

    pub fn update_names(&self) -> Vec<&'static str> {
        self.updates.lock().iter().map(StateUpdate::name).collect()
    }
}

impl StateStore for RecordingStore {
    fn read(&self) -> AppState {
        self.store.read()
    }

    fn dispatch(&self, update: StateUpdate) {
        self.updates.lock().push(update.clone());
        self.store.dispatch(update);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

pub fn member(name: &str, alias: &str) -> GroupUser {
    GroupUser {
        name: name.to_string(),
        alias: alias.to_string(),
        accepted: true,
        ..GroupUser::default()
    }
}

pub fn group(id: GroupId, owner: &str, users: Vec<GroupUser>) -> Group {
    Group {
        id,
        name: format!("Group {id}"),
        owner: owner.to_string(),
        users,
        ..Group::default()
    }
}

/// Two owners; "bob" is a member of group 1 (alice's) and group 3 (dave's).
pub fn sample_groups() -> Vec<GroupsWithOwner> {
    vec![
        GroupsWithOwner {
            owner: "alice".to_string(),
            owner_avatar: "alice.png".to_string(),
            groups: vec![
                group(1, "alice", vec![member("alice", ""), member("bob", "bobby")]),
                group(2, "alice", vec![member("alice", ""), member("carol", "")]),
            ],
        },
        GroupsWithOwner {
            owner: "dave".to_string(),
            owner_avatar: "dave.png".to_string(),
            groups: vec![group(3, "dave", vec![member("dave", ""), member("bob", "")])],
        },
    ]
}

pub fn state_with_groups(groups: Vec<GroupsWithOwner>) -> AppState {
    let mut state = AppState::default();
    state.group.groups = groups;
    state
}

/// Aliases of every occurrence of `name`, in hierarchy order.
pub fn aliases_of(groups: &[GroupsWithOwner], name: &str) -> Vec<String> {
    groups
        .iter()
        .flat_map(|owned| owned.groups.iter())
        .flat_map(|g| g.members_named(name))
        .map(|u| u.alias.clone())
        .collect()
}
