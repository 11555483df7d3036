use rand::Rng;
use std::sync::Arc;
use tracing::{error, info};

use trivia_core::model::{RawQuestion, RequestDescriptor};
use trivia_core::shuffle::shuffle;

use crate::error::FetchError;
use crate::source::QuestionSource;

/// Fetches questions for a descriptor and puts them in random order.
#[derive(Clone)]
pub struct QuestionProvider {
    source: Arc<dyn QuestionSource>,
}

impl QuestionProvider {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch and shuffle using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`.
    pub async fn fetch(&self, descriptor: &RequestDescriptor) -> Result<Vec<RawQuestion>, FetchError> {
        let questions = self.fetch_unshuffled(descriptor).await?;
        let mut rng = rand::rng();
        Ok(Self::permute(questions, &mut rng))
    }

    /// Fetch and shuffle with an explicit random source.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`.
    pub async fn fetch_with_rng<R: Rng + ?Sized>(
        &self,
        descriptor: &RequestDescriptor,
        rng: &mut R,
    ) -> Result<Vec<RawQuestion>, FetchError> {
        let questions = self.fetch_unshuffled(descriptor).await?;
        Ok(Self::permute(questions, rng))
    }

    async fn fetch_unshuffled(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Vec<RawQuestion>, FetchError> {
        match self.source.questions(descriptor).await {
            Ok(questions) => {
                info!(
                    requested = descriptor.amount(),
                    received = questions.len(),
                    difficulty = %descriptor.difficulty(),
                    category = ?descriptor.category(),
                    "fetched questions"
                );
                Ok(questions)
            }
            Err(err) => {
                error!(error = %err, "question fetch failed");
                Err(err)
            }
        }
    }

    fn permute<R: Rng + ?Sized>(mut questions: Vec<RawQuestion>, rng: &mut R) -> Vec<RawQuestion> {
        shuffle(&mut questions, rng);
        questions
    }
}
