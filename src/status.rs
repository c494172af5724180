//! Display classification of a game's status.
//!
//! A malformed status never fails the list: it classifies as `Unknown`
//! carrying the fault, and only that row shows it.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

use crate::types::GameSummary;

/// State value for a game that has not started
const PRE_GAME_STATE: &str = "pre";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatusKind {
    /// Not started; carries the localized start time
    Scheduled(String),
    InProgress { period: u32, clock: String },
    Final,
    Unknown(String),
}

impl GameStatusKind {
    pub fn label(&self) -> String {
        match self {
            Self::Scheduled(time) => time.clone(),
            Self::InProgress { period, clock } => format!("Q{} {}", period, clock),
            Self::Final => "Final".to_string(),
            Self::Unknown(fault) => fault.clone(),
        }
    }

    /// In-progress games are rendered emphasized
    pub fn is_live(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("invalid start time '{0}'")]
    InvalidDate(String),
}

/// Classify using the local timezone for scheduled start times
pub fn classify(game: &GameSummary) -> GameStatusKind {
    classify_in(game, &Local)
}

pub fn classify_in<Tz>(game: &GameSummary, tz: &Tz) -> GameStatusKind
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    try_classify(game, tz).unwrap_or_else(|e| GameStatusKind::Unknown(e.to_string()))
}

fn try_classify<Tz>(game: &GameSummary, tz: &Tz) -> Result<GameStatusKind, StatusError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let status = game
        .status
        .as_ref()
        .ok_or(StatusError::MissingField("status"))?;
    let status_type = status
        .status_type
        .as_ref()
        .ok_or(StatusError::MissingField("status.type"))?;
    let completed = status_type
        .completed
        .ok_or(StatusError::MissingField("status.type.completed"))?;

    if completed {
        return Ok(GameStatusKind::Final);
    }

    let state = status_type
        .state
        .as_deref()
        .ok_or(StatusError::MissingField("status.type.state"))?;

    if state == PRE_GAME_STATE {
        let raw = game.date.as_deref().ok_or(StatusError::MissingField("date"))?;
        let start = parse_start_time(raw)?;
        return Ok(GameStatusKind::Scheduled(format_game_time(&start, tz)));
    }

    let period = status.period.ok_or(StatusError::MissingField("status.period"))?;
    let clock = status
        .display_clock
        .clone()
        .ok_or(StatusError::MissingField("status.displayClock"))?;
    Ok(GameStatusKind::InProgress { period, clock })
}

/// Parse a start instant. Feeds send both full RFC 3339 and the
/// minute-precision `2024-01-15T00:30Z` form.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, StatusError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| StatusError::InvalidDate(raw.to_string()))
}

/// 12-hour clock, e.g. `7:30 PM`
pub fn format_game_time<Tz>(start: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    start.with_timezone(tz).format("%-I:%M %p").to_string()
}
