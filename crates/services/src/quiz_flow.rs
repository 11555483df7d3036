use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

use trivia_core::model::{CategoryId, RequestDescriptor, resolve};
use trivia_core::{Advance, Clock, QuizRunner, QuizView, RunnerError};

use crate::error::StartError;
use crate::provider::QuestionProvider;
use crate::source::QuestionSource;

/// Orchestrates resolve → fetch → run for one quiz start, and advancing.
///
/// Only one start may be in flight at a time; a second call made while the
/// first is still fetching is rejected with `StartError::AlreadyStarting`.
#[derive(Clone)]
pub struct QuizStartService {
    clock: Clock,
    provider: QuestionProvider,
    starting: Arc<AtomicBool>,
}

/// Clears the in-flight flag however the start attempt ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl QuizStartService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            provider: QuestionProvider::new(questions),
            starting: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// True while a start attempt is fetching questions.
    #[must_use]
    pub fn is_starting(&self) -> bool {
        self.starting.load(Ordering::Acquire)
    }

    /// Validate the setup input, fetch questions and start a runner on `view`.
    ///
    /// # Errors
    ///
    /// Returns `StartError::Validation` before any fetch if the input is
    /// invalid, `StartError::Fetch` if the source fails,
    /// `StartError::NoQuestions` if nothing matched, and
    /// `StartError::AlreadyStarting` if another start is in flight.
    pub async fn start_quiz<V: QuizView>(
        &self,
        category: Option<CategoryId>,
        raw_amount: &str,
        raw_difficulty: Option<&str>,
        view: V,
    ) -> Result<QuizRunner<V>, StartError> {
        let descriptor = resolve(category, raw_amount, raw_difficulty)?;
        let _guard = InFlight::acquire(&self.starting).ok_or(StartError::AlreadyStarting)?;
        let questions = self.provider.fetch(&descriptor).await?;
        let mut rng = rand::rng();
        self.run(&descriptor, questions, &mut rng, view)
    }

    /// Same as [`start_quiz`](Self::start_quiz) with an explicit random
    /// source for both the question order and the answer order.
    ///
    /// # Errors
    ///
    /// See [`start_quiz`](Self::start_quiz).
    pub async fn start_quiz_with_rng<V: QuizView, R: Rng + ?Sized>(
        &self,
        category: Option<CategoryId>,
        raw_amount: &str,
        raw_difficulty: Option<&str>,
        view: V,
        rng: &mut R,
    ) -> Result<QuizRunner<V>, StartError> {
        let descriptor = resolve(category, raw_amount, raw_difficulty)?;
        let _guard = InFlight::acquire(&self.starting).ok_or(StartError::AlreadyStarting)?;
        let questions = self.provider.fetch_with_rng(&descriptor, rng).await?;
        self.run(&descriptor, questions, rng, view)
    }

    fn run<V: QuizView, R: Rng + ?Sized>(
        &self,
        descriptor: &RequestDescriptor,
        questions: Vec<trivia_core::model::RawQuestion>,
        rng: &mut R,
        view: V,
    ) -> Result<QuizRunner<V>, StartError> {
        if questions.is_empty() {
            warn!(
                difficulty = %descriptor.difficulty(),
                category = ?descriptor.category(),
                "no questions available"
            );
            return Err(StartError::NoQuestions);
        }
        let runner = QuizRunner::start(questions, rng, view, self.clock.now())?;
        info!(total = runner.session().len(), "quiz started");
        Ok(runner)
    }

    /// Advance `runner`, stamping completion with this service's clock.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Completed` if the quiz has already finished.
    pub fn advance<V: QuizView>(&self, runner: &mut QuizRunner<V>) -> Result<Advance, RunnerError> {
        let outcome = runner.advance(self.clock.now())?;
        if let Advance::Completed(summary) = outcome {
            info!(
                score = summary.score(),
                total = summary.total(),
                elapsed_secs = summary.elapsed().num_seconds(),
                "quiz completed"
            );
        }
        Ok(outcome)
    }
}
