//! Scores screen rendering - a pure function of `ViewState`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::keys::KEY_HELP;
use super::state::{BoxScorePanel, ListPhase, ViewState, BOX_SCORE_UNAVAILABLE};
use crate::config::ThemeConfig;
use crate::status::{classify, GameStatusKind};
use crate::types::{BoxScoreData, GameSummary};

/// Width of the `AAA vs BBB` column
const MATCHUP_WIDTH: usize = 14;

/// Width of the `score : score` column
const SCORE_WIDTH: usize = 12;

const STALLED_HELP: &str = "Connection problem. Press r to retry or change the date.";

pub struct ScoresView<'a> {
    state: &'a ViewState,
    theme: &'a ThemeConfig,
}

impl<'a> ScoresView<'a> {
    pub fn new(state: &'a ViewState, theme: &'a ThemeConfig) -> Self {
        Self { state, theme }
    }

    fn controls(&self) -> Paragraph<'a> {
        let date = self.state.selected_date().to_string();
        let line = Line::from(vec![
            Span::raw("<<  <   "),
            Span::styled(date, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   >  >>"),
        ]);
        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn game_list(&self, height: u16) -> Paragraph<'a> {
        let lines = match &self.state.list {
            ListPhase::Idle | ListPhase::Loading(_) | ListPhase::Stalled => {
                vec![Line::from("Loading games...")]
            }
            ListPhase::Failed(error) if error.is_no_games() => {
                vec![Line::from(error.message().to_string())]
            }
            ListPhase::Failed(error) => vec![
                Line::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Line::from(error.message().to_string()),
            ],
            ListPhase::Loaded(games) => games
                .iter()
                .enumerate()
                .map(|(i, game)| self.game_row(game, self.state.selected_game == Some(i)))
                .collect(),
        };
        Paragraph::new(lines).scroll((self.list_offset(height), 0))
    }

    /// First visible row, chosen so the selected row stays on screen
    fn list_offset(&self, height: u16) -> u16 {
        let selected = self.state.selected_game.unwrap_or(0);
        let height = usize::from(height.max(1));
        let offset = (selected + 1).saturating_sub(height);
        u16::try_from(offset).unwrap_or(u16::MAX)
    }

    fn game_row(&self, game: &GameSummary, selected: bool) -> Line<'a> {
        let status = classify(game);
        let base = if selected {
            Style::default().fg(self.theme.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let status_style = if status.is_live() {
            Style::default().fg(self.theme.live_fg).add_modifier(Modifier::BOLD)
        } else if matches!(status, GameStatusKind::Unknown(_)) {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            base
        };

        Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, base),
            Span::styled(pad(&game.matchup(), MATCHUP_WIDTH), base),
            Span::styled(pad(&game.score_line(), SCORE_WIDTH), base),
            Span::styled(status.label(), status_style),
        ])
    }

    fn box_score_panel(&self) -> Paragraph<'a> {
        let target = self.state.box_score_target().unwrap_or_default();
        let title = match self.state.game(target) {
            Some(game) => format!(" Box Score: {} ", game.matchup()),
            None => " Box Score ".to_string(),
        };
        let lines: Vec<Line> = match &self.state.boxscore {
            BoxScorePanel::Closed => Vec::new(),
            BoxScorePanel::Loading(_) | BoxScorePanel::Stalled { .. } => {
                vec![Line::from("Loading box score...")]
            }
            BoxScorePanel::Failed { .. } => vec![Line::styled(
                BOX_SCORE_UNAVAILABLE,
                Style::default().add_modifier(Modifier::BOLD),
            )],
            BoxScorePanel::Loaded(data) => payload_lines(data),
        };
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
    }

    fn status_bar(&self) -> Paragraph<'a> {
        let text = if self.state.is_stalled() { STALLED_HELP } else { KEY_HELP };
        Paragraph::new(Line::styled(text, Style::default().add_modifier(Modifier::DIM)))
    }
}

impl Widget for ScoresView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [controls, _, body, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        self.controls().render(controls, buf);
        self.status_bar().render(status, buf);

        if self.state.is_box_score_open() {
            let [games, panel] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);
            self.game_list(games.height).render(games, buf);
            self.box_score_panel().render(panel, buf);
        } else {
            self.game_list(body.height).render(body, buf);
        }
    }
}

/// Opaque payload shown as indented JSON
fn payload_lines(data: &BoxScoreData) -> Vec<Line<'static>> {
    serde_json::to_string_pretty(&data.payload)
        .unwrap_or_else(|_| data.payload.to_string())
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect()
}

/// Left-align to a display width
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        format!("{} ", text)
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::tui::state::{BoxScoreRequest, ListError, NO_GAMES_MESSAGE};
    use crate::tui::testing::{buffer_contains, buffer_lines, loaded_state};
    use serde_json::json;
    use std::sync::Arc;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 24;

    fn render(state: &ViewState) -> Buffer {
        let theme = ThemeConfig::default();
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        let mut buf = Buffer::empty(area);
        ScoresView::new(state, &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_loading_state_shows_date_and_loading() {
        let state = ViewState::new(crate::tui::testing::test_date());
        let buf = render(&state);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("11/20/2024"));
        assert!(lines[0].contains("<<"));
        assert!(buffer_contains(&buf, "Loading games..."));
        assert!(lines[HEIGHT as usize - 1].contains("q quit"));
    }

    #[test]
    fn test_loaded_games_render_rows() {
        let buf = render(&loaded_state());
        let lines = buffer_lines(&buf);

        assert!(lines[2].starts_with("> LAL vs BOS"));
        assert!(lines[3].contains("GS vs DEN"));
        assert!(lines[3].contains("Q3 5:12"));
        assert!(lines[4].contains("MIA vs NY"));
        assert!(lines[4].contains("98 : 94"));
        assert!(lines[4].contains("Final"));
    }

    #[test]
    fn test_live_status_uses_theme_color() {
        let buf = render(&loaded_state());
        let lines = buffer_lines(&buf);
        let col = lines[3].find("Q3").unwrap() as u16;
        assert_eq!(buf[(col, 3)].fg, ThemeConfig::default().live_fg);
    }

    #[test]
    fn test_no_games_is_plain_message() {
        let mut state = ViewState::new(crate::tui::testing::test_date());
        state.list = ListPhase::Failed(ListError::new(NO_GAMES_MESSAGE));
        let buf = render(&state);

        assert!(buffer_contains(&buf, NO_GAMES_MESSAGE));
        assert!(!buffer_contains(&buf, "Error"));
    }

    #[test]
    fn test_other_failure_shows_error_heading() {
        let mut state = ViewState::new(crate::tui::testing::test_date());
        state.list = ListPhase::Failed(ListError::new("Upstream timeout"));
        let buf = render(&state);

        assert!(buffer_contains(&buf, "Error"));
        assert!(buffer_contains(&buf, "Upstream timeout"));
    }

    #[test]
    fn test_box_score_panel_states() {
        let mut state = loaded_state();
        let game_id = state.game_list().unwrap()[0].id.clone();

        state.boxscore = BoxScorePanel::Loading(BoxScoreRequest {
            game_id: game_id.clone(),
            token: state.issue_token(),
        });
        let buf = render(&state);
        assert!(buffer_contains(&buf, "Box Score: LAL vs BOS"));
        assert!(buffer_contains(&buf, "Loading box score..."));

        state.boxscore = BoxScorePanel::Failed { game_id: game_id.clone() };
        assert!(buffer_contains(&render(&state), BOX_SCORE_UNAVAILABLE));

        state.boxscore = BoxScorePanel::Loaded(Arc::new(BoxScoreData {
            game_id,
            payload: json!({"leader": "J. Doe 31"}),
        }));
        assert!(buffer_contains(&render(&state), "\"leader\": \"J. Doe 31\""));
    }

    #[test]
    fn test_stalled_state_shows_retry_hint() {
        let mut state = ViewState::new(crate::tui::testing::test_date());
        state.list = ListPhase::Stalled;
        let buf = render(&state);

        assert!(buffer_contains(&buf, "Loading games..."));
        assert!(buffer_contains(&buf, "Press r to retry"));
    }

    #[test]
    fn test_pad_handles_wide_text() {
        assert_eq!(pad("LAL", 5), "LAL  ");
        assert_eq!(pad("LONGER", 3), "LONGER ");
    }

    #[test]
    fn test_selected_row_stays_visible_with_panel_open() {
        let games: Vec<_> = (0..15)
            .map(|i| {
                fixtures::create_mock_game(
                    &format!("g{}", i),
                    ("13", &format!("A{:02}", i), "Away"),
                    ("2", "BBB", "Home"),
                    fixtures::final_status(),
                )
            })
            .collect();
        let mut state = ViewState::new(crate::tui::testing::test_date());
        state.list = ListPhase::Loaded(Arc::new(games));
        state.selected_game = Some(14);
        state.boxscore = BoxScorePanel::Failed { game_id: "g14".to_string() };

        let buf = render(&state);
        assert!(buffer_contains(&buf, "> A14 vs BBB"));
        assert!(!buffer_contains(&buf, "A00 vs BBB"));
        assert!(buffer_contains(&buf, BOX_SCORE_UNAVAILABLE));
    }

    #[test]
    fn test_short_list_is_not_scrolled() {
        let mut state = loaded_state();
        state.selected_game = Some(2);
        let lines = buffer_lines(&render(&state));
        assert!(lines[2].contains("LAL vs BOS"));
        assert!(lines[4].starts_with("> MIA vs NY"));
    }
}
