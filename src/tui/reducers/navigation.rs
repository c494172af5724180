use tracing::debug;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{BoxScorePanel, ListPhase, ListRequest, ViewState};
use crate::types::GameDate;

/// Handle date cursor and row selection actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: ViewState, action: &Action) -> Result<(ViewState, Effect), ViewState> {
    match action {
        Action::ShiftDate(days) => Ok(shift_date(state, *days)),
        Action::ResetDate(today) => Ok(reset_date(state, *today)),
        Action::Refresh => Ok(refresh(state)),
        Action::SelectNext => Ok(move_selection(state, 1)),
        Action::SelectPrevious => Ok(move_selection(state, -1)),
        _ => Err(state),
    }
}

fn shift_date(state: ViewState, days: i64) -> (ViewState, Effect) {
    let mut new_state = state;
    match new_state.cursor.shift(days) {
        Some(date) => {
            debug!("DATE: Shifted by {} to {}", days, date);
            let effect = begin_list_fetch(&mut new_state);
            (new_state, effect)
        }
        None => {
            debug!("DATE: Ignoring shift by {} (games loading or date out of range)", days);
            (new_state, Effect::None)
        }
    }
}

fn reset_date(state: ViewState, today: GameDate) -> (ViewState, Effect) {
    let mut new_state = state;
    match new_state.cursor.reset_to(today) {
        Some(date) => {
            debug!("DATE: Reset to {}", date);
            let effect = begin_list_fetch(&mut new_state);
            (new_state, effect)
        }
        None => {
            debug!("DATE: Ignoring reset while games are loading");
            (new_state, Effect::None)
        }
    }
}

fn refresh(state: ViewState) -> (ViewState, Effect) {
    let mut new_state = state;
    if new_state.cursor.is_held() {
        debug!("DATE: Ignoring refresh while games are loading");
        return (new_state, Effect::None);
    }
    let effect = begin_list_fetch(&mut new_state);
    (new_state, effect)
}

/// Return the view to its loading appearance and request the games for
/// the cursor's date. Any earlier list or box score request is superseded.
pub(crate) fn begin_list_fetch(state: &mut ViewState) -> Effect {
    let request = ListRequest {
        date: state.cursor.date(),
        token: state.issue_token(),
    };
    debug!(
        "DATA: Requesting games for {} (token {})",
        request.date,
        request.token.value()
    );
    state.list = ListPhase::Loading(request.clone());
    state.boxscore = BoxScorePanel::Closed;
    state.selected_game = None;
    state.cursor.hold();
    Effect::FetchGames(request)
}

fn move_selection(state: ViewState, delta: isize) -> (ViewState, Effect) {
    let mut new_state = state;
    let count = new_state.game_list().map(|games| games.len()).unwrap_or(0);
    if count == 0 {
        return (new_state, Effect::None);
    }
    let current = new_state.selected_game.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, count as isize - 1) as usize;
    new_state.selected_game = Some(next);
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> GameDate {
        GameDate::from_ymd(y, m, d).unwrap()
    }

    fn settled_state() -> ViewState {
        let mut state = ViewState::new(date(2024, 11, 20));
        state.list = ListPhase::Loaded(Arc::new(fixtures::create_mock_games(date(2024, 11, 20)).games));
        state.selected_game = Some(0);
        state
    }

    #[test]
    fn test_shift_issues_fetch_for_new_date_and_holds_cursor() {
        let (state, effect) = reduce_navigation(settled_state(), &Action::ShiftDate(1)).unwrap();

        let Effect::FetchGames(request) = effect else {
            panic!("Expected FetchGames effect");
        };
        assert_eq!(request.date, date(2024, 11, 21));
        assert_eq!(state.pending_list_request(), Some(&request));
        assert!(state.cursor.is_held());
        assert_eq!(state.selected_game, None);
    }

    #[test]
    fn test_shift_while_loading_is_ignored() {
        let (state, _) = reduce_navigation(settled_state(), &Action::ShiftDate(-7)).unwrap();
        let pending = state.pending_list_request().cloned();

        let (state, effect) = reduce_navigation(state, &Action::ShiftDate(1)).unwrap();
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.selected_date(), date(2024, 11, 13));
        assert_eq!(state.pending_list_request().cloned(), pending);
    }

    #[test]
    fn test_reset_date_jumps_to_given_today() {
        let (state, effect) =
            reduce_navigation(settled_state(), &Action::ResetDate(date(2025, 1, 2))).unwrap();
        assert_eq!(state.selected_date(), date(2025, 1, 2));
        assert!(matches!(effect, Effect::FetchGames(ref r) if r.date == date(2025, 1, 2)));
    }

    #[test]
    fn test_refresh_refetches_same_date_with_new_token() {
        let (state, effect) = reduce_navigation(settled_state(), &Action::Refresh).unwrap();
        let Effect::FetchGames(first) = effect else {
            panic!("Expected FetchGames effect");
        };
        assert_eq!(first.date, date(2024, 11, 20));
        assert!(state.is_list_loading());

        let (_, effect) = reduce_navigation(state, &Action::Refresh).unwrap();
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_selection_is_clamped_to_list() {
        let state = settled_state();
        let (state, _) = reduce_navigation(state, &Action::SelectPrevious).unwrap();
        assert_eq!(state.selected_game, Some(0));

        let (state, _) = reduce_navigation(state, &Action::SelectNext).unwrap();
        let (state, _) = reduce_navigation(state, &Action::SelectNext).unwrap();
        let (state, _) = reduce_navigation(state, &Action::SelectNext).unwrap();
        assert_eq!(state.selected_game, Some(2));
    }

    #[test]
    fn test_selection_without_list_is_noop() {
        let state = ViewState::new(date(2024, 1, 1));
        let (state, _) = reduce_navigation(state, &Action::SelectNext).unwrap();
        assert_eq!(state.selected_game, None);
    }

    #[test]
    fn test_unrelated_action_passes_state_back() {
        assert!(reduce_navigation(settled_state(), &Action::Quit).is_err());
    }

    #[test]
    fn test_shift_past_calendar_range_is_ignored() {
        let last = GameDate::new(chrono::NaiveDate::MAX);
        let (state, effect) = reduce_navigation(ViewState::new(last), &Action::ShiftDate(1)).unwrap();
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.selected_date(), last);
        assert!(!state.cursor.is_held());
    }
}
