use crate::commands::parse_game_date;
use crate::data_provider::ScoresDataProvider;
use crate::status::classify;
use crate::team_directory::logo_asset_path;
use crate::tui::state::DEFAULT_LIST_ERROR;
use crate::types::{ApiResponse, GameDate, GameList, GameSummary};
use anyhow::{Context, Result};

/// Width of header separator line
const HEADER_SEPARATOR_WIDTH: usize = 60;

/// Width of the matchup column
const MATCHUP_WIDTH: usize = 14;

/// Width of the score column
const SCORE_WIDTH: usize = 12;

pub async fn run(
    client: &dyn ScoresDataProvider,
    date: Option<String>,
    assets_dir: Option<&str>,
) -> Result<()> {
    let game_date = parse_game_date(date)?;

    let response = client
        .games_for_date(game_date)
        .await
        .with_context(|| format!("Failed to fetch games for {}", game_date))?;

    print!("{}", format_scores(game_date, &response, assets_dir));
    Ok(())
}

/// Render the games for a date as plain text
///
/// With `assets_dir`, each row is followed by the logo paths of both teams.
pub fn format_scores(date: GameDate, response: &ApiResponse<GameList>, assets_dir: Option<&str>) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "═".repeat(HEADER_SEPARATOR_WIDTH)));
    output.push_str(&format!("NBA SCORES - {}\n", date));
    output.push_str(&format!("{}\n\n", "═".repeat(HEADER_SEPARATOR_WIDTH)));

    if !response.is_ok() {
        let message = response.error.as_deref().unwrap_or(DEFAULT_LIST_ERROR);
        output.push_str(&format!("{}\n\n", message));
        return output;
    }

    let games = response.data.as_ref().map(|list| list.games.as_slice()).unwrap_or_default();
    if games.is_empty() {
        output.push_str("No games scheduled for this date.\n\n");
        return output;
    }

    for game in games {
        output.push_str(&format_game_row(game));
        output.push('\n');
        if let Some(dir) = assets_dir {
            for logo in team_logos(game, dir) {
                output.push_str(&format!("    {}\n", logo));
            }
        }
    }
    output.push('\n');
    output
}

fn format_game_row(game: &GameSummary) -> String {
    format!(
        "{:<mw$}{:<sw$}{}",
        game.matchup(),
        game.score_line(),
        classify(game).label(),
        mw = MATCHUP_WIDTH,
        sw = SCORE_WIDTH,
    )
}

fn team_logos(game: &GameSummary, assets_dir: &str) -> Vec<String> {
    game.competitors
        .iter()
        .take(2)
        .map(|c| match logo_asset_path(assets_dir, &c.id) {
            Some(path) => format!("{}: {}", c.team.abbreviation, path),
            None => format!("{}: (no logo)", c.team.abbreviation),
        })
        .collect()
}
