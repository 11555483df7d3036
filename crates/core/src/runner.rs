use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use crate::model::{QuestionError, QuizQuestion, QuizSession, QuizSummary, QuizSummaryError, RawQuestion};
use crate::view::{Panel, PresentedQuestion, QuizView};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunnerError {
    #[error("no questions to run")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

/// Where the runner currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Presenting(usize),
    Completed { score: usize, total: usize },
}

/// Outcome of a single [`QuizRunner::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// That was the last question.
    Completed(QuizSummary),
}

/// Snapshot of progress, for "Question 3 of 10" style indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

/// Drives one quiz run.
///
/// Each call to [`advance`](Self::advance) scores the question on screen
/// using whatever the view reports as selected at that moment, then presents
/// the next question or finishes. A finished runner stays finished; a new
/// run needs a new runner.
pub struct QuizRunner<V> {
    session: QuizSession,
    state: RunnerState,
    summary: Option<QuizSummary>,
    view: V,
}

impl<V: QuizView> QuizRunner<V> {
    /// Build the session from `questions` and present the first one.
    ///
    /// Every question gets its own answer shuffle drawn from `rng`. The
    /// question order itself is taken as given.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Empty` if `questions` is empty and
    /// `RunnerError::Question` if a record does not have four answers.
    pub fn start<R: Rng + ?Sized>(
        questions: Vec<RawQuestion>,
        rng: &mut R,
        view: V,
        started_at: DateTime<Utc>,
    ) -> Result<Self, RunnerError> {
        if questions.is_empty() {
            return Err(RunnerError::Empty);
        }
        let questions = questions
            .into_iter()
            .map(|raw| QuizQuestion::from_raw(raw, rng))
            .collect::<Result<Vec<_>, _>>()?;

        let mut runner = Self {
            session: QuizSession::new(questions, started_at),
            state: RunnerState::Presenting(0),
            summary: None,
            view,
        };
        runner.view.show_panel(Panel::InProgress);
        runner.present_current();
        Ok(runner)
    }

    #[must_use]
    pub fn state(&self) -> RunnerState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, RunnerState::Completed { .. })
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            RunnerState::Presenting(_) => self.session.current_question(),
            RunnerState::Completed { .. } => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.session.len();
        let index = self.session.current_index();
        Progress {
            index,
            total,
            answered: index,
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. to change the selection.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Score the current question and move on.
    ///
    /// `now` stamps the summary when this was the last question.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Completed` if the quiz has already finished; the
    /// runner is left unchanged in that case.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, RunnerError> {
        if self.is_complete() {
            return Err(RunnerError::Completed);
        }

        let selected = self.view.selected_answer();
        if !self.session.commit_and_advance(selected.as_deref()) {
            return Err(RunnerError::Completed);
        }

        let index = self.session.current_index();
        if index < self.session.len() {
            self.state = RunnerState::Presenting(index);
            self.present_current();
            return Ok(Advance::Next(index));
        }

        let started_at = self.session.started_at();
        let summary = QuizSummary::new(
            self.session.score(),
            self.session.len(),
            started_at,
            now.max(started_at),
        )?;
        self.state = RunnerState::Completed {
            score: summary.score(),
            total: summary.total(),
        };
        self.summary = Some(summary);
        self.view.show_panel(Panel::Results);
        self.view.show_score(&summary);
        Ok(Advance::Completed(summary))
    }

    fn present_current(&mut self) {
        let total = self.session.len();
        let number = self.session.current_index() + 1;
        if let Some(question) = self.session.current_question() {
            self.view.show_question(&PresentedQuestion {
                number,
                total,
                text: question.text(),
                answers: question.answers(),
                category: question.category(),
                difficulty: question.difficulty(),
            });
        }
    }
}

impl<V> fmt::Debug for QuizRunner<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRunner")
            .field("questions_len", &self.session.len())
            .field("current", &self.session.current_index())
            .field("state", &self.state)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
