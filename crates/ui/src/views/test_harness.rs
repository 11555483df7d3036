use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, InMemorySource, QuestionSource, QuizServices, Sources};
use trivia_core::model::Difficulty;
use trivia_core::time::fixed_now;

use crate::app::QuizRoot;
use crate::context::{UiApp, build_app_context};
use crate::views::widget::QuizTestHandles;

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<QuizServices>,
    handles: QuizTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Fill the setup form the way a user would.
    pub fn fill_setup(&self, category: Option<u32>, amount: &str, difficulty: Option<&str>) {
        let form = self.handles.form();
        let amount = amount.to_string();
        let difficulty: Option<Difficulty> = difficulty.and_then(|raw| raw.parse().ok());
        self.dom.in_runtime(|| {
            let mut form = form;
            form.category.set(category);
            form.amount.set(amount);
            form.difficulty.set(difficulty);
        });
    }

    pub fn select(&self, answer: &str) {
        let view = self.handles.view();
        let answer = answer.to_string();
        self.dom.in_runtime(|| {
            let mut selection = view.selection;
            selection.set(Some(answer));
        });
    }

    pub fn press_start(&mut self) {
        let start = self.handles.start();
        self.dom.in_runtime(|| start.call(()));
    }

    pub fn press_next(&mut self) {
        let next = self.handles.next();
        self.dom.in_runtime(|| next.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn press_play_again(&mut self) {
        let play_again = self.handles.play_again();
        self.dom.in_runtime(|| play_again.call(()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(source: InMemorySource) -> ViewHarness {
    let app = QuizServices::in_memory(source, Clock::fixed(fixed_now()));
    harness_for(app)
}

/// Harness whose questions come from `questions` and categories from `source`.
pub fn setup_view_harness_with_questions(
    source: InMemorySource,
    questions: Arc<dyn QuestionSource>,
) -> ViewHarness {
    let mut sources = Sources::in_memory(source);
    sources.questions = questions;
    harness_for(QuizServices::from_sources(sources, Clock::fixed(fixed_now())))
}

fn harness_for(app: QuizServices) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        HarnessProps {
            app: Arc::new(app),
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
