use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shuffle::shuffle;

/// Number of answer options shown for every multiple-choice question.
pub const ANSWER_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected {ANSWER_COUNT} answers, found {found}", ANSWER_COUNT = ANSWER_COUNT)]
    AnswerCount { found: usize },
}

/// A question record exactly as the question source delivered it.
///
/// `text` and the answers may contain HTML entities or markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
}

impl RawQuestion {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
            category: String::new(),
            difficulty: String::new(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, category: impl Into<String>, difficulty: impl Into<String>) -> Self {
        self.category = category.into();
        self.difficulty = difficulty.into();
        self
    }
}

/// A question prepared for one quiz run.
///
/// The answer order is fixed when the question is built. `answered_correctly`
/// is written once, when the runner advances past the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    text: String,
    correct_answer: String,
    answers: [String; ANSWER_COUNT],
    category: String,
    difficulty: String,
    answered_correctly: bool,
}

impl QuizQuestion {
    /// Wrap a raw record, shuffling its answers with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerCount` unless the record has exactly
    /// three incorrect answers.
    pub fn from_raw<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Result<Self, QuestionError> {
        let RawQuestion {
            text,
            correct_answer,
            incorrect_answers,
            category,
            difficulty,
        } = raw;

        let mut answers = Vec::with_capacity(ANSWER_COUNT);
        answers.push(correct_answer.clone());
        answers.extend(incorrect_answers);
        let found = answers.len();
        let mut answers: [String; ANSWER_COUNT] = answers
            .try_into()
            .map_err(|_| QuestionError::AnswerCount { found })?;
        shuffle(&mut answers, rng);

        Ok(Self {
            text,
            correct_answer,
            answers,
            category,
            difficulty,
            answered_correctly: false,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Answers in presentation order.
    #[must_use]
    pub fn answers(&self) -> &[String; ANSWER_COUNT] {
        &self.answers
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn answered_correctly(&self) -> bool {
        self.answered_correctly
    }

    /// Commit the user's choice. `None` counts as incorrect.
    pub(crate) fn commit(&mut self, selected: Option<&str>) {
        self.answered_correctly = selected == Some(self.correct_answer.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn raw() -> RawQuestion {
        RawQuestion::new("Capital of France?", "Paris", ["Rome", "Madrid", "Berlin"])
    }

    #[test]
    fn from_raw_keeps_all_four_answers() {
        let mut rng = StdRng::seed_from_u64(11);
        let question = QuizQuestion::from_raw(raw(), &mut rng).unwrap();
        let mut answers = question.answers().to_vec();
        answers.sort();
        assert_eq!(answers, vec!["Berlin", "Madrid", "Paris", "Rome"]);
        assert_eq!(question.correct_answer(), "Paris");
        assert!(!question.answered_correctly());
    }

    #[test]
    fn answer_order_is_stable_across_reads() {
        let mut rng = StdRng::seed_from_u64(5);
        let question = QuizQuestion::from_raw(raw(), &mut rng).unwrap();
        let first = question.answers().clone();
        for _ in 0..5 {
            assert_eq!(question.answers(), &first);
        }
    }

    #[test]
    fn wrong_answer_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let short = RawQuestion::new("True?", "True", ["False"]);
        let err = QuizQuestion::from_raw(short, &mut rng).unwrap_err();
        assert_eq!(err, QuestionError::AnswerCount { found: 2 });
    }

    #[test]
    fn commit_scores_selection() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut question = QuizQuestion::from_raw(raw(), &mut rng).unwrap();

        question.commit(Some("Rome"));
        assert!(!question.answered_correctly());

        question.commit(Some("Paris"));
        assert!(question.answered_correctly());

        question.commit(None);
        assert!(!question.answered_correctly());
    }

    #[test]
    fn meta_is_carried_over() {
        let mut rng = StdRng::seed_from_u64(0);
        let question =
            QuizQuestion::from_raw(raw().with_meta("Geography", "easy"), &mut rng).unwrap();
        assert_eq!(question.category(), "Geography");
        assert_eq!(question.difficulty(), "easy");
    }
}
