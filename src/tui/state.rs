use std::sync::Arc;

use crate::date_cursor::DateCursor;
use crate::types::{BoxScoreData, GameDate, GameSummary};

/// Message the service sends for a date without games; shown as a neutral
/// empty state rather than an error
pub const NO_GAMES_MESSAGE: &str = "No games scheduled";

/// Fixed message for any declared box score failure
pub const BOX_SCORE_UNAVAILABLE: &str = "Box score unavailable";

/// Shown when the service declares failure without saying why
pub const DEFAULT_LIST_ERROR: &str = "Unable to load games";

/// Identifies one issued fetch. Tokens only grow, so a completion carrying
/// an older token than the pending request is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub date: GameDate,
    pub token: RequestToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreRequest {
    pub game_id: String,
    pub token: RequestToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListError {
    message: String,
}

impl ListError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The empty-date message is informational, not a failure
    pub fn is_no_games(&self) -> bool {
        self.message == NO_GAMES_MESSAGE
    }
}

/// Game-list stream for the selected date
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// Nothing requested yet
    Idle,
    Loading(ListRequest),
    /// The last fetch failed in transport; still looks like loading
    Stalled,
    Loaded(Arc<Vec<GameSummary>>),
    Failed(ListError),
}

/// Box score sub-state, overlaid on a loaded list
#[derive(Debug, Clone, PartialEq)]
pub enum BoxScorePanel {
    Closed,
    Loading(BoxScoreRequest),
    /// The fetch failed in transport; still looks like loading
    Stalled { game_id: String },
    Loaded(Arc<BoxScoreData>),
    Failed { game_id: String },
}

impl BoxScorePanel {
    /// Game the panel is open for
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Loading(request) => Some(&request.game_id),
            Self::Stalled { game_id } | Self::Failed { game_id } => Some(game_id),
            Self::Loaded(data) => Some(&data.game_id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_) | Self::Stalled { .. })
    }
}

/// Everything the scores screen shows. Only the reducer writes it.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub cursor: DateCursor,
    pub list: ListPhase,
    pub boxscore: BoxScorePanel,
    /// Row the box score toggle applies to
    pub selected_game: Option<usize>,
    next_token: u64,
}

impl ViewState {
    pub fn new(date: GameDate) -> Self {
        Self {
            cursor: DateCursor::new(date),
            list: ListPhase::Idle,
            boxscore: BoxScorePanel::Closed,
            selected_game: None,
            next_token: 0,
        }
    }

    pub(crate) fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    pub fn selected_date(&self) -> GameDate {
        self.cursor.date()
    }

    pub fn game_list(&self) -> Option<&[GameSummary]> {
        match &self.list {
            ListPhase::Loaded(games) => Some(games.as_slice()),
            _ => None,
        }
    }

    pub fn game(&self, game_id: &str) -> Option<&GameSummary> {
        self.game_list()?.iter().find(|g| g.id == game_id)
    }

    pub fn selected(&self) -> Option<&GameSummary> {
        self.game_list()?.get(self.selected_game?)
    }

    /// List error, or the box score error when the panel failed
    pub fn error(&self) -> Option<&str> {
        match (&self.list, &self.boxscore) {
            (ListPhase::Failed(e), _) => Some(e.message()),
            (_, BoxScorePanel::Failed { .. }) => Some(BOX_SCORE_UNAVAILABLE),
            _ => None,
        }
    }

    /// True when the current error is the informational empty-date message
    pub fn error_is_benign(&self) -> bool {
        matches!(&self.list, ListPhase::Failed(e) if e.is_no_games())
    }

    /// Loading appearance for the list: no list and no error
    pub fn is_list_loading(&self) -> bool {
        matches!(self.list, ListPhase::Idle | ListPhase::Loading(_) | ListPhase::Stalled)
    }

    pub fn pending_list_request(&self) -> Option<&ListRequest> {
        match &self.list {
            ListPhase::Loading(request) => Some(request),
            _ => None,
        }
    }

    pub fn is_box_score_open(&self) -> bool {
        self.boxscore.is_open()
    }

    pub fn box_score_target(&self) -> Option<&str> {
        self.boxscore.target()
    }

    pub fn box_score_payload(&self) -> Option<&BoxScoreData> {
        match &self.boxscore {
            BoxScorePanel::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn pending_box_score_request(&self) -> Option<&BoxScoreRequest> {
        match &self.boxscore {
            BoxScorePanel::Loading(request) => Some(request),
            _ => None,
        }
    }

    /// A fetch failed in transport and the screen is showing stale loading
    pub fn is_stalled(&self) -> bool {
        matches!(self.list, ListPhase::Stalled)
            || matches!(self.boxscore, BoxScorePanel::Stalled { .. })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(GameDate::today())
    }
}
