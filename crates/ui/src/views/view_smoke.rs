use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use services::{FetchError, InMemorySource, QuestionSource};
use tokio::sync::Notify;
use trivia_core::model::{Category, CategoryId, RawQuestion, RequestDescriptor};

use super::test_harness::{setup_view_harness, setup_view_harness_with_questions};

fn bank(n: usize) -> Vec<RawQuestion> {
    (1..=n)
        .map(|i| {
            RawQuestion::new(format!("Question number {i}"), "Right", ["Wrong A", "Wrong B", "Wrong C"])
                .with_meta("General Knowledge", "easy")
        })
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn setup_panel_lists_loaded_categories() {
    let source = InMemorySource::new().with_categories(vec![
        Category::new(CategoryId::new(22), "Geography"),
        Category::new(CategoryId::new(9), "General Knowledge"),
    ]);
    let mut harness = setup_view_harness(source);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Any category"), "missing any option in {html}");
    assert!(html.contains("General Knowledge"), "missing category in {html}");
    assert!(html.contains("Geography"), "missing category in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn category_failure_still_offers_any_category() {
    let mut harness = setup_view_harness(InMemorySource::new().failing("offline"));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Any category"), "missing any option in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_amount_shows_notice_without_fetching() {
    let source = InMemorySource::new().with_questions(bank(5));
    let mut harness = setup_view_harness(source.clone());
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(None, "25", Some("easy"));
    harness.press_start();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("between 1 and 19"), "missing notice in {html}");
    assert_eq!(source.question_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn missing_difficulty_shows_notice() {
    let mut harness = setup_view_harness(InMemorySource::new().with_questions(bank(3)));
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(None, "3", None);
    harness.press_start();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Please choose a difficulty."), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_result_shows_notice() {
    let mut harness = setup_view_harness(InMemorySource::new());
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(Some(9), "5", Some("hard"));
    harness.press_start();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No questions are available"), "missing notice in {html}");
    assert!(html.contains("Start quiz"), "setup panel should stay visible: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_runs_to_results_and_plays_again() {
    let mut harness = setup_view_harness(InMemorySource::new().with_questions(bank(2)));
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(Some(9), "2", Some("easy"));
    harness.press_start();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing heading in {html}");
    assert!(html.contains("General Knowledge"), "missing meta in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");

    harness.select("Right");
    harness.press_next();
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing heading in {html}");
    assert!(html.contains("Finish"), "missing finish button in {html}");

    harness.press_next();
    let html = harness.render();
    assert!(
        html.contains("You answered 1 out of 2 questions correctly."),
        "missing score in {html}"
    );
    assert!(html.contains("Play again"), "missing play again in {html}");

    harness.press_play_again();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start quiz"), "missing fresh setup panel in {html}");
    assert!(!html.contains("You answered"), "stale results in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_text_is_rendered_as_markup() {
    let questions = vec![RawQuestion::new(
        "Who said &quot;Hello&quot;<script>alert(1)</script>?",
        "Right",
        ["Wrong A", "Wrong B", "Wrong C"],
    )];
    let mut harness = setup_view_harness(InMemorySource::new().with_questions(questions));
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(None, "1", Some("medium"));
    harness.press_start();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Hello"), "missing question text in {html}");
    assert!(!html.contains("<script>"), "unsanitized markup in {html}");
    assert!(!html.contains("&amp;quot;"), "double escaped entity in {html}");
}

struct GatedSource {
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
    questions: Vec<RawQuestion>,
}

#[async_trait::async_trait]
impl QuestionSource for GatedSource {
    async fn questions(&self, _descriptor: &RequestDescriptor) -> Result<Vec<RawQuestion>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.questions.clone())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn start_is_disabled_while_fetching() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let gated = GatedSource {
        gate: Arc::clone(&gate),
        calls: Arc::clone(&calls),
        questions: bank(1),
    };
    let mut harness = setup_view_harness_with_questions(InMemorySource::new(), Arc::new(gated));
    harness.rebuild();
    harness.drive_async().await;

    harness.fill_setup(None, "1", Some("easy"));
    harness.press_start();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing busy label in {html}");

    harness.press_start();
    harness.drive_async().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    gate.notify_one();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing question in {html}");
}
