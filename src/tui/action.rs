use crate::types::{ApiResponse, GameDate, GameList};

use super::state::{BoxScoreRequest, ListRequest};

/// Global actions - like Redux actions
///
/// All state changes happen through actions, dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Date cursor
    ShiftDate(i64),
    ResetDate(GameDate),
    /// Reload the games for the current date
    Refresh,

    // Game rows
    SelectNext,
    SelectPrevious,
    ToggleBoxScore(String),
    CloseBoxScore,

    // Data loaded (from effects), tagged with the request they answer.
    // `Err` is a transport or decode failure.
    GamesLoaded(ListRequest, Result<ApiResponse<GameList>, String>),
    BoxscoreLoaded(BoxScoreRequest, Result<ApiResponse<serde_json::Value>, String>),

    Quit,
}

impl Action {
    /// Completions arriving from effects rather than the user
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::GamesLoaded(..) | Self::BoxscoreLoaded(..))
    }
}
