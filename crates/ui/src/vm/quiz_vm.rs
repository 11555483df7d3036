use trivia_core::PresentedQuestion;
use trivia_core::model::{Category, QuizSummary};

use crate::vm::html::sanitize_html;
use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryVm {
    pub id: u32,
    pub name: String,
}

impl From<Category> for CategoryVm {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.value(),
            name: category.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    /// Raw answer text, compared against the correct answer on submit.
    pub value: String,
    pub label_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub heading: String,
    pub meta: String,
    pub text_html: String,
    pub options: Vec<AnswerOptionVm>,
    pub is_last: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Finish" } else { "Next" }
    }
}

impl From<&PresentedQuestion<'_>> for QuestionVm {
    fn from(question: &PresentedQuestion<'_>) -> Self {
        let meta = match (question.category.is_empty(), question.difficulty.is_empty()) {
            (false, false) => format!("{} · {}", question.category, question.difficulty),
            (false, true) => question.category.to_string(),
            (true, false) => question.difficulty.to_string(),
            (true, true) => String::new(),
        };
        Self {
            number: question.number,
            total: question.total,
            heading: format!("Question {} of {}", question.number, question.total),
            meta: sanitize_html(&meta),
            text_html: sanitize_html(question.text),
            options: question
                .answers
                .iter()
                .map(|answer| AnswerOptionVm {
                    value: answer.clone(),
                    label_html: sanitize_html(answer),
                })
                .collect(),
            is_last: question.is_last(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score: usize,
    pub total: usize,
    pub message: String,
    pub elapsed: String,
}

impl From<&QuizSummary> for ScoreVm {
    fn from(summary: &QuizSummary) -> Self {
        Self {
            score: summary.score(),
            total: summary.total(),
            message: score_message(summary.score(), summary.total()),
            elapsed: format_elapsed(summary.elapsed()),
        }
    }
}

#[must_use]
pub fn score_message(score: usize, total: usize) -> String {
    format!("You answered {score} out of {total} questions correctly.")
}
