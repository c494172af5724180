/// Trait for providing scores data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{ApiResponse, GameDate, GameList};

/// Trait for scores data providers, implemented by both the real Client and MockClient
///
/// An `Err` is a transport or decode failure. A declared failure from the
/// service comes back as `Ok` with a non-`ok` status.
#[async_trait]
pub trait ScoresDataProvider: Send + Sync {
    /// Get the games scheduled on a date
    async fn games_for_date(&self, date: GameDate) -> ApiResult<ApiResponse<GameList>>;

    /// Get the box score for a game, payload left opaque
    async fn boxscore(&self, game_id: &str) -> ApiResult<ApiResponse<serde_json::Value>>;
}
