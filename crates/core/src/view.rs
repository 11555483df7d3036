//! Rendering seam for the quiz runner.
//!
//! The runner never touches a rendering surface directly. It talks to a
//! `QuizView`, which the UI implements on top of its own state and tests
//! implement with a recorder.

use crate::model::{ANSWER_COUNT, QuizSummary};

/// The three screens of the quiz widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Setup,
    InProgress,
    Results,
}

/// Everything a view needs to render the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentedQuestion<'a> {
    /// 1-based position in the quiz.
    pub number: usize,
    pub total: usize,
    pub text: &'a str,
    pub answers: &'a [String; ANSWER_COUNT],
    pub category: &'a str,
    pub difficulty: &'a str,
}

impl PresentedQuestion<'_> {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.number == self.total
    }
}

pub trait QuizView {
    fn show_panel(&mut self, panel: Panel);

    /// Replace the displayed question. Implementations must clear any
    /// previous selection.
    fn show_question(&mut self, question: &PresentedQuestion<'_>);

    /// The answer the user has currently selected, if any.
    fn selected_answer(&self) -> Option<String>;

    fn show_score(&mut self, summary: &QuizSummary);
}

impl<V: QuizView + ?Sized> QuizView for &mut V {
    fn show_panel(&mut self, panel: Panel) {
        (**self).show_panel(panel);
    }

    fn show_question(&mut self, question: &PresentedQuestion<'_>) {
        (**self).show_question(question);
    }

    fn selected_answer(&self) -> Option<String> {
        (**self).selected_answer()
    }

    fn show_score(&mut self, summary: &QuizSummary) {
        (**self).show_score(summary);
    }
}

/// A view that keeps what it was shown in memory.
///
/// Useful for driving a runner without a rendering surface; the selection is
/// set with [`RecordingView::select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    pub panel: Panel,
    pub panels: Vec<Panel>,
    pub questions: Vec<ShownQuestion>,
    pub selection: Option<String>,
    pub summary: Option<QuizSummary>,
}

/// Owned copy of a [`PresentedQuestion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownQuestion {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub answers: [String; ANSWER_COUNT],
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, answer: impl Into<String>) {
        self.selection = Some(answer.into());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    #[must_use]
    pub fn last_question(&self) -> Option<&ShownQuestion> {
        self.questions.last()
    }
}

impl QuizView for RecordingView {
    fn show_panel(&mut self, panel: Panel) {
        self.panel = panel;
        self.panels.push(panel);
    }

    fn show_question(&mut self, question: &PresentedQuestion<'_>) {
        self.selection = None;
        self.questions.push(ShownQuestion {
            number: question.number,
            total: question.total,
            text: question.text.to_string(),
            answers: question.answers.clone(),
        });
    }

    fn selected_answer(&self) -> Option<String> {
        self.selection.clone()
    }

    fn show_score(&mut self, summary: &QuizSummary) {
        self.summary = Some(*summary);
    }
}
