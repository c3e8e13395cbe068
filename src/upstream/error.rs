use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Provider disabled: {0}")]
    Disabled(String),
}
