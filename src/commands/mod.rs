pub mod boxscore;
pub mod scores;

use anyhow::{Context, Result};

use crate::types::GameDate;

/// Parse optional date string to GameDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<GameDate> {
    match date {
        Some(date_str) => GameDate::parse(&date_str)
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)),
        None => Ok(GameDate::today()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_date() {
        let date = parse_game_date(Some("2024-11-20".to_string())).unwrap();
        assert_eq!(date, GameDate::from_ymd(2024, 11, 20).unwrap());
        assert_eq!(parse_game_date(None).unwrap(), GameDate::today());
    }

    #[test]
    fn test_parse_game_date_rejects_other_formats() {
        let err = parse_game_date(Some("11/20/2024".to_string())).unwrap_err();
        assert!(format!("{:#}", err).contains("Use YYYY-MM-DD"));
    }
}
