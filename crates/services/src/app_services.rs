use std::sync::Arc;

use crate::Clock;
use crate::categories::CategoryService;
use crate::error::FetchError;
use crate::quiz_flow::QuizStartService;
use crate::source::{InMemorySource, Sources};
use crate::trivia::TriviaConfig;

/// Assembles the app-facing services over one set of sources.
#[derive(Clone)]
pub struct QuizServices {
    categories: Arc<CategoryService>,
    quiz: Arc<QuizStartService>,
}

impl QuizServices {
    /// Build services backed by the Open Trivia Database.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP client cannot be built.
    pub fn open_tdb(config: TriviaConfig, clock: Clock) -> Result<Self, FetchError> {
        Ok(Self::from_sources(Sources::open_tdb(config)?, clock))
    }

    #[must_use]
    pub fn in_memory(source: InMemorySource, clock: Clock) -> Self {
        Self::from_sources(Sources::in_memory(source), clock)
    }

    #[must_use]
    pub fn from_sources(sources: Sources, clock: Clock) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(sources.categories)),
            quiz: Arc::new(QuizStartService::new(clock, sources.questions)),
        }
    }

    #[must_use]
    pub fn categories(&self) -> Arc<CategoryService> {
        Arc::clone(&self.categories)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizStartService> {
        Arc::clone(&self.quiz)
    }
}
