//! General test utilities for TUI tests.
//!
//! This module provides common state builders and buffer helpers used
//! across multiple test modules.

use std::sync::Arc;

use ratatui::buffer::Buffer;

use crate::fixtures;
use crate::tui::state::{ListPhase, ViewState};
use crate::types::GameDate;

/// Date every fixture state is built for
pub fn test_date() -> GameDate {
    GameDate::from_ymd(2024, 11, 20).expect("valid fixture date")
}

/// State with the fixture games loaded and the first row selected
pub fn loaded_state() -> ViewState {
    let mut state = ViewState::new(test_date());
    state.list = ListPhase::Loaded(Arc::new(fixtures::create_mock_games(test_date()).games));
    state.selected_game = Some(0);
    state
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// True when any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}
