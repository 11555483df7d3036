//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::RunnerError;
use trivia_core::model::DescriptorError;

/// Errors emitted while talking to a question or category source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("trivia source rejected the request parameters")]
    InvalidParameter,
    #[error("trivia source is rate limiting requests")]
    RateLimited,
    #[error("trivia source returned response code {0}")]
    ResponseCode(u8),
    #[error("trivia source returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid trivia url: {0}")]
    Url(#[from] url::ParseError),
    #[error("trivia source unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizStartService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StartError {
    #[error(transparent)]
    Validation(#[from] DescriptorError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no questions available for that selection")]
    NoQuestions,
    #[error("a quiz is already starting")]
    AlreadyStarting,
    #[error(transparent)]
    Runner(#[from] RunnerError),
}
