use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{Clock, InMemorySource, QuizServices, StartError};
use trivia_core::model::{Category, CategoryId, DescriptorError, Difficulty, RawQuestion};
use trivia_core::time::fixed_now;
use trivia_core::{Advance, Panel, RecordingView};

fn bank(n: usize) -> Vec<RawQuestion> {
    (1..=n)
        .map(|i| {
            RawQuestion::new(
                format!("Question {i}"),
                format!("Right {i}"),
                [format!("Wrong {i}a"), format!("Wrong {i}b"), format!("Wrong {i}c")],
            )
            .with_meta("General Knowledge", "medium")
        })
        .collect()
}

#[tokio::test]
async fn five_question_quiz_scores_alternate_answers() {
    let source = InMemorySource::new().with_questions(bank(5));
    let services = QuizServices::in_memory(source.clone(), Clock::fixed(fixed_now()));
    let quiz = services.quiz();
    let mut rng = StdRng::seed_from_u64(21);

    let mut runner = quiz
        .start_quiz_with_rng(
            Some(CategoryId::new(9)),
            "5",
            Some("medium"),
            RecordingView::new(),
            &mut rng,
        )
        .await
        .unwrap();

    let sent = source.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount(), 5);
    assert_eq!(sent[0].difficulty(), Difficulty::Medium);
    assert_eq!(sent[0].category(), Some(CategoryId::new(9)));

    let mut last = None;
    let mut number = 0;
    while !runner.is_complete() {
        number += 1;
        let question = runner.current_question().unwrap();
        let pick = if number % 2 == 1 {
            question.correct_answer().to_string()
        } else {
            question
                .answers()
                .iter()
                .find(|a| *a != question.correct_answer())
                .cloned()
                .unwrap()
        };
        runner.view_mut().select(pick);
        last = Some(quiz.advance(&mut runner).unwrap());
    }

    let Some(Advance::Completed(summary)) = last else {
        panic!("quiz should have completed");
    };
    assert_eq!((summary.score(), summary.total()), (3, 5));

    let view = runner.view();
    assert_eq!(view.panels, vec![Panel::InProgress, Panel::Results]);
    assert_eq!(view.questions.len(), 5);
    assert_eq!(view.summary.map(|s| s.score()), Some(3));
}

#[tokio::test]
async fn out_of_range_amount_never_reaches_the_source() {
    let source = InMemorySource::new().with_questions(bank(5));
    let services = QuizServices::in_memory(source.clone(), Clock::fixed(fixed_now()));

    for raw in ["25", "0", "", "five"] {
        let err = services
            .quiz()
            .start_quiz(None, raw, Some("easy"), RecordingView::new())
            .await
            .unwrap_err();
        assert!(
            matches!(err, StartError::Validation(DescriptorError::InvalidAmount { .. })),
            "{raw:?} gave {err:?}"
        );
    }
    assert_eq!(source.question_calls(), 0);
}

#[tokio::test]
async fn unanswered_questions_count_as_wrong() {
    let source = InMemorySource::new().with_questions(bank(3));
    let services = QuizServices::in_memory(source, Clock::fixed(fixed_now()));
    let quiz = services.quiz();
    let mut runner = quiz
        .start_quiz(None, "3", Some("hard"), RecordingView::new())
        .await
        .unwrap();

    while !runner.is_complete() {
        quiz.advance(&mut runner).unwrap();
    }
    assert_eq!(runner.summary().map(|s| s.score()), Some(0));
}

#[tokio::test]
async fn categories_load_sorted_and_failures_degrade_to_empty() {
    let source = InMemorySource::new().with_categories(vec![
        Category::new(CategoryId::new(22), "Geography"),
        Category::new(CategoryId::new(9), "General Knowledge"),
        Category::new(CategoryId::new(17), "animals"),
    ]);
    let services = QuizServices::in_memory(source, Clock::fixed(fixed_now()));
    let names: Vec<_> = services
        .categories()
        .load()
        .await
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["animals", "General Knowledge", "Geography"]);

    let offline = QuizServices::in_memory(
        InMemorySource::new().failing("offline"),
        Clock::fixed(fixed_now()),
    );
    assert!(offline.categories().load().await.is_empty());
}
