/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::action::Action;
use super::state::ViewState;
use crate::date_cursor::WEEK;
use crate::types::GameDate;

/// Help line shown in the status bar
pub const KEY_HELP: &str =
    "[ ] week | ←→ day | t today | ↑↓ game | Enter box score | r refresh | q quit";

pub fn key_to_action(key: KeyEvent, state: &ViewState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => {
            if state.is_box_score_open() {
                debug!("KEY: ESC pressed with box score open - closing panel");
                Some(Action::CloseBoxScore)
            } else {
                Some(Action::Quit)
            }
        }

        KeyCode::Char('[') | KeyCode::Char('H') => Some(Action::ShiftDate(-WEEK)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::ShiftDate(-1)),
        KeyCode::Char('t') => Some(Action::ResetDate(GameDate::today())),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::ShiftDate(1)),
        KeyCode::Char(']') | KeyCode::Char('L') => Some(Action::ShiftDate(WEEK)),
        KeyCode::Char('r') => Some(Action::Refresh),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char('b') => {
            let game = state.selected()?;
            Some(Action::ToggleBoxScore(game.id.clone()))
        }

        _ => None,
    }
}
