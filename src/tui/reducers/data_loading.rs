use std::sync::Arc;
use tracing::{debug, error};

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{
    BoxScorePanel, BoxScoreRequest, ListError, ListPhase, ListRequest, ViewState,
    DEFAULT_LIST_ERROR,
};
use crate::types::{ApiResponse, BoxScoreData, GameList};

/// Handle all data loading actions (API responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: ViewState,
    action: &Action,
) -> Result<(ViewState, Effect), ViewState> {
    match action {
        Action::GamesLoaded(request, result) => Ok(handle_games_loaded(state, request, result)),
        Action::BoxscoreLoaded(request, result) => {
            Ok(handle_boxscore_loaded(state, request, result))
        }
        _ => Err(state),
    }
}

fn handle_games_loaded(
    state: ViewState,
    request: &ListRequest,
    result: &Result<ApiResponse<GameList>, String>,
) -> (ViewState, Effect) {
    let mut new_state = state;

    if new_state.pending_list_request() != Some(request) {
        debug!(
            "DATA: Dropping stale games for {} (token {})",
            request.date,
            request.token.value()
        );
        return (new_state, Effect::None);
    }

    new_state.cursor.release();

    match result {
        Ok(response) if response.is_ok() => {
            let games = response
                .data
                .as_ref()
                .map(|list| list.games.clone())
                .unwrap_or_default();
            debug!("DATA: Loaded {} games for {}", games.len(), request.date);
            new_state.selected_game = if games.is_empty() { None } else { Some(0) };
            new_state.list = ListPhase::Loaded(Arc::new(games));
        }
        Ok(response) => {
            let message = response.error.as_deref().unwrap_or(DEFAULT_LIST_ERROR);
            debug!("DATA: Games for {} unavailable: {}", request.date, message);
            new_state.list = ListPhase::Failed(ListError::new(message));
        }
        Err(e) => {
            error!("Error fetching games for {}: {}", request.date, e);
            new_state.list = ListPhase::Stalled;
        }
    }

    (new_state, Effect::None)
}

fn handle_boxscore_loaded(
    state: ViewState,
    request: &BoxScoreRequest,
    result: &Result<ApiResponse<serde_json::Value>, String>,
) -> (ViewState, Effect) {
    let mut new_state = state;

    if new_state.pending_box_score_request() != Some(request) {
        debug!(
            "DATA: Dropping stale box score for game {} (token {})",
            request.game_id,
            request.token.value()
        );
        return (new_state, Effect::None);
    }

    let game_id = request.game_id.clone();
    new_state.boxscore = match result {
        Ok(response) if response.is_ok() => {
            debug!("DATA: Loaded box score for game {}", game_id);
            BoxScorePanel::Loaded(Arc::new(BoxScoreData {
                game_id,
                payload: response.data.clone().unwrap_or(serde_json::Value::Null),
            }))
        }
        Ok(response) => {
            debug!(
                "DATA: Box score for game {} unavailable: {}",
                game_id,
                response.error.as_deref().unwrap_or("no reason given")
            );
            BoxScorePanel::Failed { game_id }
        }
        Err(e) => {
            error!("Error fetching box score for game {}: {}", game_id, e);
            BoxScorePanel::Stalled { game_id }
        }
    };

    (new_state, Effect::None)
}
