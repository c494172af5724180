/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Mock mode (`--mock`) - running the app without a scores service
/// 3. Benchmarks - providing consistent data for performance testing
use serde_json::json;

use crate::types::{Competitor, GameDate, GameList, GameStatus, GameSummary, StatusType, Team};

/// Create the games for a date: one scheduled, one live, one final
pub fn create_mock_games(date: GameDate) -> GameList {
    let key = date.api_key();
    GameList {
        games: vec![
            create_mock_game(&format!("{}-1", key), ("13", "LAL", "Los Angeles Lakers"), ("2", "BOS", "Boston Celtics"), pre_game()),
            create_mock_game(&format!("{}-2", key), ("9", "GS", "Golden State Warriors"), ("7", "DEN", "Denver Nuggets"), live(3, "5:12")),
            create_mock_game(&format!("{}-3", key), ("14", "MIA", "Miami Heat"), ("18", "NY", "New York Knicks"), final_status()),
        ],
    }
}

/// Helper to create a mock game
pub fn create_mock_game(
    id: &str,
    first: (&str, &str, &str),
    second: (&str, &str, &str),
    status: GameStatus,
) -> GameSummary {
    let started = status
        .status_type
        .as_ref()
        .and_then(|t| t.state.as_deref())
        .map(|state| state != "pre")
        .unwrap_or(false);
    let competitor = |(team_id, abbrev, name): (&str, &str, &str), score: &str| Competitor {
        id: team_id.to_string(),
        team: Team {
            display_name: name.to_string(),
            abbreviation: abbrev.to_string(),
        },
        score: Some(if started { score } else { "0" }.to_string()),
    };

    GameSummary {
        id: id.to_string(),
        competitors: vec![competitor(first, "98"), competitor(second, "94")],
        status: Some(status),
        date: Some("2024-11-21T00:30Z".to_string()),
    }
}

pub fn pre_game() -> GameStatus {
    status(false, "pre", 0, "0.0")
}

pub fn live(period: u32, clock: &str) -> GameStatus {
    status(false, "in", period, clock)
}

pub fn final_status() -> GameStatus {
    status(true, "post", 4, "0.0")
}

fn status(completed: bool, state: &str, period: u32, clock: &str) -> GameStatus {
    GameStatus {
        status_type: Some(StatusType {
            completed: Some(completed),
            state: Some(state.to_string()),
        }),
        period: Some(period),
        display_clock: Some(clock.to_string()),
    }
}

/// Create an opaque box score payload for a game
pub fn create_mock_boxscore(game_id: &str) -> serde_json::Value {
    json!({
        "gameId": game_id,
        "teams": [
            {"abbreviation": "AWY", "points": 98, "rebounds": 44, "assists": 25},
            {"abbreviation": "HME", "points": 94, "rebounds": 41, "assists": 21}
        ],
        "leaders": {
            "points": "J. Doe 31",
            "rebounds": "A. Smith 12"
        }
    })
}
