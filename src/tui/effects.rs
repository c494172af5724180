use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use super::state::{BoxScoreRequest, ListRequest};
use crate::data_provider::ScoresDataProvider;

/// Pending work that resolves to the action reporting its outcome
pub type ActionFuture = Pin<Box<dyn Future<Output = Action> + Send>>;

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Async(ActionFuture),
    /// Fetch the games for a date; resolved by the runtime through DataEffects
    FetchGames(ListRequest),
    FetchBoxscore(BoxScoreRequest),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::FetchGames(request) => f.debug_tuple("FetchGames").field(request).finish(),
            Self::FetchBoxscore(request) => f.debug_tuple("FetchBoxscore").field(request).finish(),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that resolves to the matching *Loaded
/// action, tagged with the request it answers. The network call always
/// runs to completion; superseded results are dropped by the reducer.
pub struct DataEffects {
    client: Arc<dyn ScoresDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn ScoresDataProvider>) -> Self {
        Self { client }
    }

    pub fn fetch_games(&self, request: ListRequest) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.games_for_date(request.date).await;
            Action::GamesLoaded(request, result.map_err(|e| e.to_string()))
        }))
    }

    pub fn fetch_boxscore(&self, request: BoxScoreRequest) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.boxscore(&request.game_id).await;
            Action::BoxscoreLoaded(request, result.map_err(|e| e.to_string()))
        }))
    }
}
