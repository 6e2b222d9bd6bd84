//! Reducer trait and the reducer for [`AppState`].

use super::state::StoreState;
use super::update::StateUpdate;
use crate::model::{AppState, UserState};

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    type State: StoreState;
    type Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = StateUpdate;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            StateUpdate::UserDataReceived(profile) => {
                state.user.profile = Some(profile);
            }
            StateUpdate::UserClear => {
                state.user = UserState::default();
            }
            StateUpdate::GroupsReceived(groups) => {
                state.group.groups = groups;
            }
            StateUpdate::GroupReceived(group) => {
                state.group.group = group;
            }
        }
        state
    }
}
