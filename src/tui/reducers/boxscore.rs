use tracing::debug;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{BoxScorePanel, BoxScoreRequest, ViewState};

/// Handle box score panel toggling
pub fn reduce_boxscore(state: ViewState, action: &Action) -> Result<(ViewState, Effect), ViewState> {
    match action {
        Action::ToggleBoxScore(game_id) => Ok(toggle_boxscore(state, game_id)),
        Action::CloseBoxScore => Ok(close_boxscore(state)),
        _ => Err(state),
    }
}

/// Open the panel for `game_id`, or collapse it if it is already open for
/// that game. Opening supersedes any earlier box score request.
fn toggle_boxscore(state: ViewState, game_id: &str) -> (ViewState, Effect) {
    let mut new_state = state;

    let Some(index) = new_state
        .game_list()
        .and_then(|games| games.iter().position(|g| g.id == game_id))
    else {
        debug!("BOXSCORE: Ignoring toggle for game {} not in the current list", game_id);
        return (new_state, Effect::None);
    };

    if new_state.box_score_target() == Some(game_id) {
        debug!("BOXSCORE: Collapsing panel for game {}", game_id);
        new_state.boxscore = BoxScorePanel::Closed;
        return (new_state, Effect::None);
    }

    let request = BoxScoreRequest {
        game_id: game_id.to_string(),
        token: new_state.issue_token(),
    };
    debug!(
        "BOXSCORE: Requesting box score for game {} (token {})",
        game_id,
        request.token.value()
    );
    new_state.selected_game = Some(index);
    new_state.boxscore = BoxScorePanel::Loading(request.clone());
    (new_state, Effect::FetchBoxscore(request))
}

fn close_boxscore(state: ViewState) -> (ViewState, Effect) {
    let mut new_state = state;
    new_state.boxscore = BoxScorePanel::Closed;
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::tui::state::ListPhase;
    use crate::types::GameDate;
    use std::sync::Arc;

    fn loaded_state() -> ViewState {
        let date = GameDate::from_ymd(2024, 11, 20).unwrap();
        let mut state = ViewState::new(date);
        state.list = ListPhase::Loaded(Arc::new(fixtures::create_mock_games(date).games));
        state
    }

    fn toggle(state: ViewState, game_id: &str) -> (ViewState, Effect) {
        reduce_boxscore(state, &Action::ToggleBoxScore(game_id.to_string())).unwrap()
    }

    #[test]
    fn test_toggle_opens_panel_and_requests_fetch() {
        let (state, effect) = toggle(loaded_state(), "11202024-2");

        let Effect::FetchBoxscore(request) = effect else {
            panic!("Expected FetchBoxscore effect");
        };
        assert_eq!(request.game_id, "11202024-2");
        assert!(state.is_box_score_open());
        assert!(state.boxscore.is_loading());
        assert_eq!(state.selected_game, Some(1));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_toggle_same_game_collapses() {
        let (state, _) = toggle(loaded_state(), "11202024-1");
        let (state, effect) = toggle(state, "11202024-1");

        assert!(matches!(effect, Effect::None));
        assert_eq!(state.boxscore, BoxScorePanel::Closed);
        assert!(state.box_score_target().is_none());
    }

    #[test]
    fn test_toggle_other_game_supersedes() {
        let (state, first) = toggle(loaded_state(), "11202024-1");
        let (state, second) = toggle(state, "11202024-3");

        let (Effect::FetchBoxscore(first), Effect::FetchBoxscore(second)) = (first, second) else {
            panic!("Expected two FetchBoxscore effects");
        };
        assert!(second.token > first.token);
        assert_eq!(state.pending_box_score_request(), Some(&second));
    }

    #[test]
    fn test_toggle_unknown_game_is_ignored() {
        let (state, effect) = toggle(loaded_state(), "nope");
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_box_score_open());

        let (state, effect) = toggle(ViewState::default(), "11202024-1");
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_box_score_open());
    }

    #[test]
    fn test_close_clears_failed_panel() {
        let mut state = loaded_state();
        state.boxscore = BoxScorePanel::Failed { game_id: "11202024-1".to_string() };
        let (state, _) = reduce_boxscore(state, &Action::CloseBoxScore).unwrap();
        assert!(state.error().is_none());
        assert!(!state.is_box_score_open());
    }
}
