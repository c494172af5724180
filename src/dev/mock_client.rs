/// Mock scores client for development and testing
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::data_provider::ScoresDataProvider;
use crate::error::{ApiError, ApiResult};
use crate::fixtures;
use crate::types::{ApiResponse, GameDate, GameList};

/// Canned behavior of a MockClient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockMode {
    /// Fixture games for every date and a payload for every box score
    #[default]
    Fixtures,
    /// Every date answers `No games scheduled`
    NoGames,
    /// Games load, every box score is declared unavailable
    BoxScoreUnavailable,
    /// Every request fails at the transport level
    Unreachable,
}

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient {
    mode: MockMode,
    latency: Option<Duration>,
    games_requests: AtomicUsize,
    boxscore_requests: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::default()
    }

    pub fn with_mode(mode: MockMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Delay every response, to watch loading states
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn games_requests(&self) -> usize {
        self.games_requests.load(Ordering::SeqCst)
    }

    pub fn boxscore_requests(&self) -> usize {
        self.boxscore_requests.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn unreachable(url: String) -> ApiError {
        ApiError::Status { status: 503, url }
    }
}

#[async_trait]
impl ScoresDataProvider for MockClient {
    async fn games_for_date(&self, date: GameDate) -> ApiResult<ApiResponse<GameList>> {
        self.games_requests.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        info!("MockClient: Returning mock games for date {}", date);
        match self.mode {
            MockMode::Unreachable => Err(Self::unreachable(format!("mock://date/{}", date.api_key()))),
            MockMode::NoGames => Ok(ApiResponse::failed("No games scheduled")),
            MockMode::Fixtures | MockMode::BoxScoreUnavailable => {
                Ok(ApiResponse::ok(fixtures::create_mock_games(date)))
            }
        }
    }

    async fn boxscore(&self, game_id: &str) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.boxscore_requests.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        info!("MockClient: Returning mock boxscore for game {}", game_id);
        match self.mode {
            MockMode::Unreachable => Err(Self::unreachable(format!("mock://boxscore/{}", game_id))),
            MockMode::BoxScoreUnavailable => Ok(ApiResponse::failed("stats feed offline")),
            MockMode::Fixtures | MockMode::NoGames => {
                Ok(ApiResponse::ok(fixtures::create_mock_boxscore(game_id)))
            }
        }
    }
}
