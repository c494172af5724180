//! Selected-date cursor for the scores screen.
//!
//! The cursor owns the browsed calendar date. While a game-list fetch for
//! the current date is outstanding the cursor is held, and date changes
//! are ignored until that fetch settles.

use crate::types::GameDate;

/// Days moved by the week buttons
pub const WEEK: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCursor {
    date: GameDate,
    held: bool,
}

impl DateCursor {
    pub fn new(date: GameDate) -> Self {
        Self { date, held: false }
    }

    pub fn date(&self) -> GameDate {
        self.date
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Block date changes until `release` is called
    pub fn hold(&mut self) {
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Move the date by `days` (negative = past). Returns the new date, or
    /// `None` when the cursor is held or the target is out of range.
    pub fn shift(&mut self, days: i64) -> Option<GameDate> {
        if self.held {
            return None;
        }
        self.date = self.date.add_days(days)?;
        Some(self.date)
    }

    pub fn reset_to_today(&mut self) -> Option<GameDate> {
        self.reset_to(GameDate::today())
    }

    /// Jump to `today`. Same hold rule as `shift`.
    pub fn reset_to(&mut self, today: GameDate) -> Option<GameDate> {
        if self.held {
            return None;
        }
        self.date = today;
        Some(self.date)
    }
}

impl Default for DateCursor {
    fn default() -> Self {
        Self::new(GameDate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> GameDate {
        GameDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_forward_then_back_restores_date() {
        let mut cursor = DateCursor::new(date(2024, 2, 29));
        cursor.shift(1);
        assert_eq!(cursor.date(), date(2024, 3, 1));
        cursor.shift(-1);
        assert_eq!(cursor.date(), date(2024, 2, 29));
    }

    #[test]
    fn test_shift_by_week() {
        let mut cursor = DateCursor::new(date(2024, 1, 3));
        assert_eq!(cursor.shift(-WEEK), Some(date(2023, 12, 27)));
        assert_eq!(cursor.shift(2 * WEEK), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_held_cursor_ignores_shift_and_reset() {
        let mut cursor = DateCursor::new(date(2024, 1, 3));
        cursor.hold();

        assert_eq!(cursor.shift(1), None);
        assert_eq!(cursor.reset_to(date(2024, 5, 5)), None);
        assert_eq!(cursor.date(), date(2024, 1, 3));

        cursor.release();
        assert_eq!(cursor.shift(1), Some(date(2024, 1, 4)));
    }

    #[test]
    fn test_reset_to_today() {
        let mut cursor = DateCursor::new(date(2020, 6, 1));
        assert_eq!(cursor.reset_to(date(2024, 11, 20)), Some(date(2024, 11, 20)));
        assert_eq!(cursor.reset_to_today(), Some(GameDate::today()));
    }

    #[test]
    fn test_shift_out_of_range_keeps_date() {
        let last = GameDate::new(chrono::NaiveDate::MAX);
        let mut cursor = DateCursor::new(last);
        assert_eq!(cursor.shift(WEEK), None);
        assert_eq!(cursor.date(), last);
        assert!(!cursor.is_held());
    }
}
