//! Effect coordinator for user intents.
//!
//! One handler runs per intent. Within a kind the newest intent wins: an
//! older handler keeps running until its network call settles, but its
//! result is dropped without a broadcast or a notification. API errors
//! do no I/O and are shown for every occurrence.

mod alias;
mod latest;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::UserApi;
use crate::model::GroupId;
use crate::mvi::{IntentKind, StateUpdate, UserIntent};
use crate::notify::Notifier;
use crate::store::StateStore;

pub use alias::rename_alias;
pub use latest::{LatestWins, Ticket};

/// How a handler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Result broadcast to the store.
    Completed,
    /// Failure reported through the notifier.
    Failed,
    /// A newer intent of the same kind arrived first; nothing published.
    Superseded,
}

pub struct EffectCoordinator<A, S, N> {
    inner: Arc<Inner<A, S, N>>,
}

struct Inner<A, S, N> {
    api: A,
    store: S,
    notifier: N,
    latest: LatestWins,
}

impl<A, S, N> Clone for EffectCoordinator<A, S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: UserApi, S: StateStore, N: Notifier> EffectCoordinator<A, S, N> {
    pub fn new(api: A, store: S, notifier: N) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                notifier,
                latest: LatestWins::new(),
            }),
        }
    }

    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Starts the handler for `intent` on the tokio runtime.
    ///
    /// The intent's generation is claimed before this returns, so intents
    /// dispatched in order are superseded in that order regardless of how
    /// the spawned tasks get scheduled.
    ///
    /// API errors have no I/O to wait on and are never superseded: the
    /// notification is emitted before this returns and the handle resolves
    /// to [`Outcome::Completed`].
    pub fn dispatch(&self, intent: UserIntent) -> JoinHandle<Outcome> {
        let intent = match intent {
            UserIntent::ApiErrorReceived { error } => {
                let outcome = self.inner.notify_api_error(&error);
                return tokio::spawn(std::future::ready(outcome));
            }
            other => other,
        };

        let ticket = self.inner.latest.begin(intent.kind());
        let span = tracing::info_span!(
            "user_effect",
            kind = %ticket.kind(),
            generation = ticket.generation(),
            run_id = %Uuid::new_v4()
        );
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.handle(ticket, intent).await }.instrument(span))
    }

    /// Dispatches intents until every sender is dropped.
    pub async fn run(self, mut intents: mpsc::Receiver<UserIntent>) {
        while let Some(intent) = intents.recv().await {
            self.dispatch(intent);
        }
        tracing::info!("Intent bus closed, coordinator stopping");
    }
}

impl<A: UserApi, S: StateStore, N: Notifier> Inner<A, S, N> {
    async fn handle(&self, ticket: Ticket, intent: UserIntent) -> Outcome {
        let outcome = match intent {
            UserIntent::ApiErrorReceived { error } => self.notify_api_error(&error),
            UserIntent::Update { name } => self.refresh_user(&ticket, &name).await,
            UserIntent::AliasUpdate {
                target_user,
                alias,
                group_id,
            } => {
                self.change_alias(&ticket, &target_user, &alias, group_id)
                    .await
            }
        };

        match outcome {
            Outcome::Superseded => {
                tracing::debug!("Superseded by a newer intent, result discarded")
            }
            other => tracing::debug!(outcome = ?other, "Handler finished"),
        }
        outcome
    }

    fn notify_api_error(&self, error: &str) -> Outcome {
        tracing::debug!(kind = %IntentKind::ApiErrorReceived, "Showing API error");
        self.notifier.error(error);
        Outcome::Completed
    }

    async fn refresh_user(&self, ticket: &Ticket, name: &str) -> Outcome {
        let result = self.api.fetch_user(name).await;

        self.latest
            .commit(ticket, || match result {
                Ok(record) => {
                    self.store
                        .dispatch(StateUpdate::UserDataReceived(record.into_profile()));
                    Outcome::Completed
                }
                Err(error) => {
                    // Every failure looks the same to the user.
                    tracing::warn!(user = %name, %error, "Profile refresh failed");
                    self.store.dispatch(StateUpdate::UserClear);
                    self.notifier.error(&format!("User {} Not Found", name));
                    Outcome::Failed
                }
            })
            .unwrap_or(Outcome::Superseded)
    }

    async fn change_alias(
        &self,
        ticket: &Ticket,
        target_user: &str,
        alias: &str,
        group_id: GroupId,
    ) -> Outcome {
        let result = self.api.change_user_alias(target_user, alias).await;

        self.latest
            .commit(ticket, || match result {
                Ok(()) => {
                    // Read after the await: the hierarchy may have moved on
                    // while the request was in flight.
                    let snapshot = self.store.read();
                    let (groups, focused) =
                        rename_alias(&snapshot.group.groups, target_user, alias, group_id);

                    tracing::info!(
                        user = %target_user,
                        group_id,
                        focused = focused.is_some(),
                        "Alias changed"
                    );
                    self.store.dispatch(StateUpdate::GroupsReceived(groups));
                    self.store.dispatch(StateUpdate::GroupReceived(focused));
                    Outcome::Completed
                }
                Err(error) => {
                    tracing::warn!(user = %target_user, %error, "Alias change failed");
                    self.notifier
                        .error(&format!("changeAlias Fail: {}", error));
                    Outcome::Failed
                }
            })
            .unwrap_or(Outcome::Superseded)
    }
}
