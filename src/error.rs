use thiserror::Error;

/// Message shown to the user for every failure that isn't reported by the server.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while searching. Please try again.";

#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend answered with an `error` field in its payload.
    #[error("{0}")]
    Server(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl SearchError {
    /// Text to put in the error panel. Only server-reported errors are surfaced verbatim.
    pub fn user_message(&self) -> &str {
        match self {
            SearchError::Server(message) => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
