use dioxus::prelude::*;

use services::{FetchError, StartError};
use trivia_core::model::DescriptorError;

/// User-facing failure shown in the notice banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidAmount,
    NoDifficulty,
    NoQuestions,
    AlreadyStarting,
    RateLimited,
    Unavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidAmount => "Please enter a number of questions between 1 and 19.",
            Self::NoDifficulty => "Please choose a difficulty.",
            Self::NoQuestions => {
                "No questions are available for that selection. Try another category or difficulty."
            }
            Self::AlreadyStarting => "A quiz is already being prepared.",
            Self::RateLimited => "Too many requests. Please wait a few seconds and try again.",
            Self::Unavailable => "Could not reach the trivia service. Please try again.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&StartError> for ViewError {
    fn from(err: &StartError) -> Self {
        match err {
            StartError::Validation(DescriptorError::InvalidAmount { .. }) => Self::InvalidAmount,
            StartError::Validation(DescriptorError::NoDifficultySelected) => Self::NoDifficulty,
            StartError::NoQuestions => Self::NoQuestions,
            StartError::AlreadyStarting => Self::AlreadyStarting,
            StartError::Fetch(FetchError::RateLimited) => Self::RateLimited,
            StartError::Fetch(_) => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
