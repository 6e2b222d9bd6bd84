use thiserror::Error;

/// Errors returned by [`super::UserApi`] implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User '{name}' not found")]
    NotFound { name: String },

    /// Non-success response other than 404.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
