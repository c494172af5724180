use crate::data_provider::ScoresDataProvider;
use crate::tui::state::BOX_SCORE_UNAVAILABLE;
use crate::types::ApiResponse;
use anyhow::{Context, Result};

pub async fn run(client: &dyn ScoresDataProvider, game_id: &str) -> Result<()> {
    let response = client
        .boxscore(game_id)
        .await
        .with_context(|| format!("Failed to fetch box score for game {}", game_id))?;

    println!("{}", format_boxscore(game_id, &response)?);
    Ok(())
}

/// Pretty-printed payload, or the unavailable notice for a declared failure
pub fn format_boxscore(game_id: &str, response: &ApiResponse<serde_json::Value>) -> Result<String> {
    if !response.is_ok() {
        if let Some(reason) = &response.error {
            tracing::debug!("Box score for {} unavailable: {}", game_id, reason);
        }
        return Ok(BOX_SCORE_UNAVAILABLE.to_string());
    }

    let payload = response.data.as_ref().unwrap_or(&serde_json::Value::Null);
    serde_json::to_string_pretty(payload).context("Failed to format box score")
}
