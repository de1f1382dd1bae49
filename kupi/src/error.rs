use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed with status {0}")]
    Status(StatusCode),

    #[error("Failed to parse structured data: {0}")]
    Json(#[from] serde_json::Error),
}
