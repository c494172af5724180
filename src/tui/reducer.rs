use tracing::trace;

use super::action::Action;
use super::effects::Effect;
use super::state::ViewState;

use crate::tui::reducers::{reduce_boxscore, reduce_data_loading, reduce_navigation};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here: fetches are returned as `Effect`s and executed
/// by the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: ViewState, action: Action) -> (ViewState, Effect) {
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_boxscore(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::Quit => (state, Effect::None),
        other => {
            trace!("REDUCER: Unhandled action {:?}", other);
            (state, Effect::None)
        }
    }
}
