//! Scripted in-process [`UserApi`] with per-call gates.

#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;
use user_effects::api::{ApiError, UserApi};
use user_effects::model::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchUser(String),
    ChangeAlias { target_user: String, alias: String },
}

#[derive(Debug, Clone)]
enum FetchReply {
    User(UserRecord),
    Status(u16, String),
}

#[derive(Default)]
pub struct FakeApi {
    users: Mutex<HashMap<String, FetchReply>>,
    alias_failures: Mutex<HashMap<String, String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Serves `name` with the four profile fields plus a few extras.
    pub fn with_user(&self, name: &str, id: u64) -> &Self {
        let mut extra = Map::new();
        extra.insert("timezone".to_string(), json!("Asia/Shanghai"));
        extra.insert("currency".to_string(), json!("CNY"));
        extra.insert("theme".to_string(), Value::from("DARK"));
        let record = UserRecord {
            name: name.to_string(),
            avatar: format!("https://cdn.example.com/{name}.png"),
            id,
            thumbnail: format!("https://cdn.example.com/{name}-thumb.png"),
            extra,
        };
        self.users
            .lock()
            .insert(name.to_string(), FetchReply::User(record));
        self
    }

    pub fn with_fetch_status(&self, name: &str, status: u16, message: &str) -> &Self {
        self.users.lock().insert(
            name.to_string(),
            FetchReply::Status(status, message.to_string()),
        );
        self
    }

    pub fn failing_alias(&self, target_user: &str, message: &str) -> &Self {
        self.alias_failures
            .lock()
            .insert(target_user.to_string(), message.to_string());
        self
    }

    /// Holds `fetch_user(name)` until the returned gate is notified.
    pub fn gate_fetch(&self, name: &str) -> Arc<Notify> {
        self.gate(format!("fetch:{name}"))
    }

    /// Holds `change_user_alias(target, alias)` until the gate is notified.
    pub fn gate_alias(&self, target_user: &str, alias: &str) -> Arc<Notify> {
        self.gate(format!("alias:{target_user}:{alias}"))
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn gate(&self, key: String) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().insert(key, Arc::clone(&gate));
        gate
    }

    async fn pass_gate(&self, key: String) {
        let gate = self.gates.lock().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

impl UserApi for FakeApi {
    async fn fetch_user(&self, name: &str) -> Result<UserRecord, ApiError> {
        self.calls.lock().push(ApiCall::FetchUser(name.to_string()));
        self.pass_gate(format!("fetch:{name}")).await;

        let reply = self.users.lock().get(name).cloned();
        match reply {
            Some(FetchReply::User(record)) => Ok(record),
            Some(FetchReply::Status(status, message)) => Err(ApiError::Status { status, message }),
            None => Err(ApiError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    async fn change_user_alias(&self, target_user: &str, alias: &str) -> Result<(), ApiError> {
        self.calls.lock().push(ApiCall::ChangeAlias {
            target_user: target_user.to_string(),
            alias: alias.to_string(),
        });
        self.pass_gate(format!("alias:{target_user}:{alias}")).await;

        let failure = self.alias_failures.lock().get(target_user).cloned();
        match failure {
            Some(message) => Err(ApiError::Status {
                status: 403,
                message,
            }),
            None => Ok(()),
        }
    }
}
