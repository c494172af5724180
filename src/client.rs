//! HTTP client for the scores service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::data_provider::ScoresDataProvider;
use crate::error::{ApiError, ApiResult};
use crate::types::{ApiResponse, GameDate, GameList};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::BaseUrl(base_url));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn games_url(&self, date: GameDate) -> String {
        format!("{}/date/{}", self.base_url, date.api_key())
    }

    pub fn boxscore_url(&self, game_id: &str) -> String {
        format!("{}/boxscore/{}", self.base_url, game_id)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("HTTP: GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ScoresDataProvider for Client {
    async fn games_for_date(&self, date: GameDate) -> ApiResult<ApiResponse<GameList>> {
        self.get(&self.games_url(date)).await
    }

    async fn boxscore(&self, game_id: &str) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.get(&self.boxscore_url(game_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("http://localhost:5000/api/nba/", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_games_url_uses_date_key() {
        let date = GameDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(client().games_url(date), "http://localhost:5000/api/nba/date/01052024");
    }

    #[test]
    fn test_boxscore_url() {
        assert_eq!(
            client().boxscore_url("401585601"),
            "http://localhost:5000/api/nba/boxscore/401585601"
        );
    }

    #[test]
    fn test_rejects_base_url_without_scheme() {
        let result = Client::new("localhost:5000", Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::BaseUrl(_))));
    }
}
