//! API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Credential rejected by the server")]
    Unauthorized,

    #[error("Unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}
