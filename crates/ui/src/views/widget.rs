use dioxus::prelude::*;
use tracing::warn;

use trivia_core::{Panel, QuizRunner};

use crate::context::AppContext;
use crate::views::{
    QuestionPanel, ResultsPanel, SetupPanel, ViewError, view_state_from_resource,
};
use crate::vm::{CategoryVm, SignalView, use_setup_form, use_signal_view};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// One quiz from setup to results. Remount it (new `key`) to play again.
#[component]
pub fn QuizWidget(on_play_again: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let category_service = ctx.categories();
    let quiz = ctx.quiz();

    let view = use_signal_view();
    let form = use_setup_form();
    let runner = use_signal(|| None::<QuizRunner<SignalView>>);
    let notice = use_signal(|| None::<ViewError>);
    let starting = use_signal(|| false);

    let categories = use_resource(move || {
        let category_service = category_service.clone();
        async move {
            let loaded = category_service.load().await;
            Ok::<_, ViewError>(loaded.into_iter().map(CategoryVm::from).collect::<Vec<_>>())
        }
    });
    let category_state = view_state_from_resource(categories);

    let start = {
        let quiz = quiz.clone();
        use_callback(move |()| {
            let mut notice = notice;
            let mut starting = starting;
            let mut runner = runner;
            if *starting.peek() {
                return;
            }
            let input = form.snapshot();
            let quiz = quiz.clone();
            starting.set(true);
            spawn(async move {
                let result = quiz
                    .start_quiz(input.category, &input.amount, input.raw_difficulty(), view)
                    .await;
                starting.set(false);
                match result {
                    Ok(started) => {
                        notice.set(None);
                        runner.set(Some(started));
                    }
                    Err(err) => {
                        warn!(error = %err, "quiz did not start");
                        notice.set(Some(ViewError::from(&err)));
                    }
                }
            });
        })
    };

    let next = use_callback(move |()| {
        let mut runner = runner;
        let mut guard = runner.write();
        let Some(active) = guard.as_mut() else {
            return;
        };
        if let Err(err) = quiz.advance(active) {
            warn!(error = %err, "advance ignored");
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(start, next, on_play_again, form, view);
        }
    }

    let body = match (view.panel)() {
        Panel::Setup => rsx! {
            SetupPanel {
                categories: category_state,
                form,
                starting: starting(),
                notice: notice(),
                on_start: move |()| start.call(()),
            }
        },
        Panel::InProgress => match (view.question)() {
            Some(question) => rsx! {
                QuestionPanel {
                    question,
                    selection: view.selection,
                    on_next: move |()| next.call(()),
                }
            },
            None => rsx! {},
        },
        Panel::Results => match (view.score)() {
            Some(score) => rsx! {
                ResultsPanel { score, on_play_again }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div { class: "quiz-widget", {body} }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    start: Rc<RefCell<Option<Callback<()>>>>,
    next: Rc<RefCell<Option<Callback<()>>>>,
    play_again: Rc<RefCell<Option<EventHandler<()>>>>,
    form: Rc<RefCell<Option<crate::vm::SetupForm>>>,
    view: Rc<RefCell<Option<SignalView>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        start: Callback<()>,
        next: Callback<()>,
        play_again: EventHandler<()>,
        form: crate::vm::SetupForm,
        view: SignalView,
    ) {
        *self.start.borrow_mut() = Some(start);
        *self.next.borrow_mut() = Some(next);
        *self.play_again.borrow_mut() = Some(play_again);
        *self.form.borrow_mut() = Some(form);
        *self.view.borrow_mut() = Some(view);
    }

    pub(crate) fn start(&self) -> Callback<()> {
        (*self.start.borrow()).expect("start registered")
    }

    pub(crate) fn next(&self) -> Callback<()> {
        (*self.next.borrow()).expect("next registered")
    }

    pub(crate) fn play_again(&self) -> EventHandler<()> {
        (*self.play_again.borrow()).expect("play again registered")
    }

    pub(crate) fn form(&self) -> crate::vm::SetupForm {
        (*self.form.borrow()).expect("form registered")
    }

    pub(crate) fn view(&self) -> SignalView {
        (*self.view.borrow()).expect("view registered")
    }
}
