use thiserror::Error;

/// Transport and decoding failures talking to the scores service.
///
/// A response the service itself marks as failed (`status != "ok"`) is
/// not an `ApiError`; it is delivered inside `ApiResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base url '{0}'")]
    BaseUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
