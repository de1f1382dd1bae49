use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to generate timestamp")]
    Timestamp(#[from] std::time::SystemTimeError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Posting failed with status {status}: {detail}")]
    Api { status: StatusCode, detail: String },

    #[error("Parse error: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}
