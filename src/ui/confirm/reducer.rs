use crate::store::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::ConfirmState;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Ask { prompt, target } => match state {
                // Never replace a question the user has not answered yet
                visible @ ConfirmState::Visible { .. } => visible,
                ConfirmState::Hidden => ConfirmState::Visible { prompt, target },
            },
            ConfirmIntent::Accept | ConfirmIntent::Dismiss => ConfirmState::Hidden,
        }
    }
}
