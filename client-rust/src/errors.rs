use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the backend failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the backend was unexpected. (e.g. a missing
    /// pagination cursor)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type ContentApiResult<T> = Result<T, ContentApiError>;
