use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerchantError {
    #[error("Failed to build gateway request: {0}")]
    Build(String),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(
        "received non-OK response from gateway: {}",
        .0.canonical_reason().unwrap_or("Unknown Status")
    )]
    Gateway(StatusCode),
    #[error("Failed to decode gateway response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no data in response")]
    NoData,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MerchantError {
    /// Whether the caller can fix the failure by changing its request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MerchantError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, MerchantError>;
