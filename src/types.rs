/// Shared types used across the application
///
/// This module contains the calendar date being browsed and the wire
/// shapes returned by the scores service. They are shared between the
/// library (commands, tui) and the binary (main.rs).
use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Status value the scores service uses for a successful response
pub const STATUS_OK: &str = "ok";

/// Calendar date whose games are displayed (no time component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameDate(NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The local calendar date right now
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` date
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }

    /// Shift by a signed number of calendar days, `None` past the
    /// representable range
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(Duration::try_days(days)?)
            .map(Self)
    }

    /// Eight digit `MMDDYYYY` key used by the game-list endpoint
    pub fn api_key(&self) -> String {
        self.0.format("%m%d%Y").to_string()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d/%Y"))
    }
}

/// Envelope every scores service response is wrapped in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameList {
    #[serde(default)]
    pub games: Vec<GameSummary>,
}

/// One scheduled, live or finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub status: Option<GameStatus>,
    /// ISO-8601 scheduled start instant
    #[serde(default)]
    pub date: Option<String>,
}

impl GameSummary {
    pub fn competitor(&self, index: usize) -> Option<&Competitor> {
        self.competitors.get(index)
    }

    /// `AAA vs BBB` heading, `TBD` for a missing side
    pub fn matchup(&self) -> String {
        let abbrev = |i: usize| {
            self.competitor(i)
                .map(|c| c.team.abbreviation.as_str())
                .unwrap_or("TBD")
        };
        format!("{} vs {}", abbrev(0), abbrev(1))
    }

    /// `score : score` line, `-` for a missing score
    pub fn score_line(&self) -> String {
        let score = |i: usize| {
            self.competitor(i)
                .and_then(|c| c.score.as_deref())
                .unwrap_or("-")
        };
        format!("{} : {}", score(0), score(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// External team id, resolved through the team directory
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub team: Team,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    #[serde(rename = "type", default, deserialize_with = "deserialize_lenient")]
    pub status_type: Option<StatusType>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusType {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub completed: Option<bool>,
    /// `"pre"` marks a game that has not started
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub state: Option<String>,
}

/// Detailed statistics for one game, kept opaque
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScoreData {
    pub game_id: String,
    pub payload: serde_json::Value,
}

/// Ids arrive as strings from some feeds and numbers from others
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

/// Status fields of the wrong type read as absent, so the row classifies
/// as unknown instead of failing the whole list
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Scores arrive as strings or bare numbers
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
