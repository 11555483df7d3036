use dioxus::prelude::*;

use trivia_core::model::QuizSummary;
use trivia_core::{Panel, PresentedQuestion, QuizView};

use crate::vm::quiz_vm::{QuestionVm, ScoreVm};

/// `QuizView` backed by Dioxus signals, so the runner drives rendering.
///
/// The runner only writes through this handle; the widget reads the same
/// signals to pick the visible panel and fill it in.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalView {
    pub panel: Signal<Panel>,
    pub question: Signal<Option<QuestionVm>>,
    pub selection: Signal<Option<String>>,
    pub score: Signal<Option<ScoreVm>>,
}

/// Hook creating the signals behind a [`SignalView`].
pub fn use_signal_view() -> SignalView {
    SignalView {
        panel: use_signal(Panel::default),
        question: use_signal(|| None),
        selection: use_signal(|| None),
        score: use_signal(|| None),
    }
}

impl QuizView for SignalView {
    fn show_panel(&mut self, panel: Panel) {
        self.panel.set(panel);
    }

    fn show_question(&mut self, question: &PresentedQuestion<'_>) {
        self.selection.set(None);
        self.question.set(Some(QuestionVm::from(question)));
    }

    fn selected_answer(&self) -> Option<String> {
        (*self.selection.peek()).clone()
    }

    fn show_score(&mut self, summary: &QuizSummary) {
        self.score.set(Some(ScoreVm::from(summary)));
    }
}
