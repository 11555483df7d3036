use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::question::QuizQuestion;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: usize, total: usize },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Ordered questions of one quiz run plus the progress pointer.
///
/// `current` only ever moves forward by one; the session is finished once it
/// equals the number of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>, started_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            current: 0,
            started_at,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Number of questions answered correctly so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.answered_correctly())
            .count()
    }

    /// Commit `selected` for the current question and move the pointer on.
    ///
    /// Returns `false` without touching anything if the session is finished.
    pub(crate) fn commit_and_advance(&mut self, selected: Option<&str>) -> bool {
        let Some(question) = self.questions.get_mut(self.current) else {
            return false;
        };
        question.commit(selected);
        self.current += 1;
        true
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Final result of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and `QuizSummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(
        score: usize,
        total: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::RawQuestion;
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_session(n: usize) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(0);
        let questions = (0..n)
            .map(|i| {
                let raw = RawQuestion::new(format!("Q{i}"), "right", ["w1", "w2", "w3"]);
                QuizQuestion::from_raw(raw, &mut rng).unwrap()
            })
            .collect();
        QuizSession::new(questions, fixed_now())
    }

    #[test]
    fn session_advances_monotonically() {
        let mut session = build_session(2);
        assert_eq!(session.current_index(), 0);
        assert!(session.commit_and_advance(Some("right")));
        assert_eq!(session.current_index(), 1);
        assert!(session.commit_and_advance(None));
        assert_eq!(session.current_index(), 2);
        assert!(session.is_finished());
        assert!(!session.commit_and_advance(Some("right")));
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn summary_rejects_inverted_range() {
        let now = fixed_now();
        let err = QuizSummary::new(1, 2, now, now - Duration::seconds(1)).unwrap_err();
        assert_eq!(err, QuizSummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_score_over_total() {
        let now = fixed_now();
        let err = QuizSummary::new(3, 2, now, now).unwrap_err();
        assert_eq!(err, QuizSummaryError::ScoreExceedsTotal { score: 3, total: 2 });
    }

    #[test]
    fn summary_reports_elapsed() {
        let now = fixed_now();
        let summary = QuizSummary::new(2, 5, now, now + Duration::seconds(75)).unwrap();
        assert_eq!(summary.elapsed(), Duration::seconds(75));
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 5);
    }
}
