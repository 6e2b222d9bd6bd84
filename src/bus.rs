//! Intent bus between the UI and the coordinator.

use std::fmt;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::model::GroupId;
use crate::mvi::UserIntent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    #[error("Intent bus closed")]
    Closed,
}

/// Creates a bounded bus. Feed the receiver to
/// [`EffectCoordinator::run`](crate::coordinator::EffectCoordinator::run).
pub fn intent_bus(capacity: usize) -> (IntentSender, mpsc::Receiver<UserIntent>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (IntentSender { sender }, receiver)
}

#[derive(Clone)]
pub struct IntentSender {
    sender: mpsc::Sender<UserIntent>,
}

impl IntentSender {
    pub async fn send(&self, intent: UserIntent) -> Result<(), BusError> {
        self.sender.send(intent).await.map_err(|_| BusError::Closed)
    }

    pub async fn report_api_error(&self, error: impl fmt::Display) -> Result<(), BusError> {
        self.send(UserIntent::api_error(error)).await
    }

    pub async fn update_user(&self, name: impl Into<String>) -> Result<(), BusError> {
        self.send(UserIntent::update(name)).await
    }

    pub async fn update_alias(
        &self,
        target_user: impl Into<String>,
        alias: impl Into<String>,
        group_id: GroupId,
    ) -> Result<(), BusError> {
        self.send(UserIntent::alias_update(target_user, alias, group_id))
            .await
    }
}
