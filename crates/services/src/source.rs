use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trivia_core::model::{Category, RawQuestion, RequestDescriptor};

use crate::error::FetchError;
use crate::trivia::{OpenTdbClient, TriviaConfig};

/// Where quiz questions come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch questions matching `descriptor`, in source order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the source cannot be reached or answers with
    /// something unusable. An empty result is not an error.
    async fn questions(&self, descriptor: &RequestDescriptor) -> Result<Vec<RawQuestion>, FetchError>;
}

/// Where the selectable categories come from.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// # Errors
    ///
    /// Returns `FetchError` if the category list cannot be loaded.
    async fn categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// Canned source for tests and offline prototyping.
///
/// Counts calls so callers can check whether a fetch happened at all.
#[derive(Clone, Default)]
pub struct InMemorySource {
    questions: Arc<Mutex<Vec<RawQuestion>>>,
    categories: Arc<Mutex<Vec<Category>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    question_calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(self, questions: Vec<RawQuestion>) -> Self {
        if let Ok(mut guard) = self.questions.lock() {
            *guard = questions;
        }
        self
    }

    #[must_use]
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        if let Ok(mut guard) = self.categories.lock() {
            *guard = categories;
        }
        self
    }

    /// Make every subsequent call fail with `FetchError::Unavailable`.
    #[must_use]
    pub fn failing(self, reason: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.fail_with.lock() {
            *guard = Some(reason.into());
        }
        self
    }

    #[must_use]
    pub fn question_calls(&self) -> usize {
        self.question_calls.load(Ordering::SeqCst)
    }

    /// Descriptors received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn check_failure(&self) -> Result<(), FetchError> {
        let guard = self
            .fail_with
            .lock()
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;
        match guard.as_ref() {
            Some(reason) => Err(FetchError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn questions(&self, descriptor: &RequestDescriptor) -> Result<Vec<RawQuestion>, FetchError> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(*descriptor);
        }
        self.check_failure()?;
        let guard = self
            .questions
            .lock()
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;
        let amount = usize::from(descriptor.amount());
        Ok(guard.iter().take(amount).cloned().collect())
    }
}

#[async_trait]
impl CategorySource for InMemorySource {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.check_failure()?;
        let guard = self
            .categories
            .lock()
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Question and category sources behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Sources {
    pub questions: Arc<dyn QuestionSource>,
    pub categories: Arc<dyn CategorySource>,
}

impl Sources {
    /// Sources backed by the Open Trivia Database.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be built.
    pub fn open_tdb(config: TriviaConfig) -> Result<Self, FetchError> {
        let client = OpenTdbClient::new(config)?;
        let questions: Arc<dyn QuestionSource> = Arc::new(client.clone());
        let categories: Arc<dyn CategorySource> = Arc::new(client);
        Ok(Self {
            questions,
            categories,
        })
    }

    #[must_use]
    pub fn in_memory(source: InMemorySource) -> Self {
        let questions: Arc<dyn QuestionSource> = Arc::new(source.clone());
        let categories: Arc<dyn CategorySource> = Arc::new(source);
        Self {
            questions,
            categories,
        }
    }
}
