use std::sync::Arc;

use quiz_core::model::{AnswerKey, Category, Difficulty, QuizParams, QuizRequest};

use super::test_harness::{
    FakeSource, ScriptedSource, question, setup_view_harness, setup_view_harness_with,
};
use crate::vm::QuizIntent;

fn key(raw: &str) -> AnswerKey {
    AnswerKey::new(raw).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_renders_filters_and_actions() {
    let params = QuizParams::new(Difficulty::Medium, Some(Category::Bash));
    let harness = setup_view_harness(FakeSource::Questions(Vec::new()), params);
    let html = harness.render();

    assert!(html.contains("Devquiz"), "missing title in {html}");
    assert!(html.contains("Get Random Quiz"), "missing random button in {html}");
    assert!(html.contains("Get Quiz"), "missing filtered button in {html}");
    assert!(html.contains("Medium"), "missing difficulty option in {html}");
    assert!(html.contains("Select category"), "missing category placeholder in {html}");
    assert!(html.contains("Go home"), "missing home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_plays_through_to_score() {
    let source = FakeSource::Questions(vec![question(1, "answer_b"), question(2, "answer_a")]);
    let mut harness = setup_view_harness(source, QuizParams::default());

    harness.send(QuizIntent::StartRandom).await;
    let html = harness.render();
    assert!(html.contains("Question number 1"), "missing first question in {html}");
    assert!(html.contains("Bravo"), "missing answer button in {html}");
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");

    harness.send(QuizIntent::Answer(key("answer_b"))).await;
    let html = harness.render();
    assert!(html.contains("Question number 2"), "missing second question in {html}");
    assert_eq!(harness.score(), 1);

    harness.send(QuizIntent::Answer(key("answer_a"))).await;
    let html = harness.render();
    assert!(html.contains("You scored 2 out of 2!"), "missing score in {html}");
    assert!(!html.contains("Question number"), "question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn go_home_returns_to_start_screen() {
    let source = FakeSource::Questions(vec![question(1, "answer_a"), question(2, "answer_a")]);
    let mut harness = setup_view_harness(source, QuizParams::default());

    harness.send(QuizIntent::StartFiltered).await;
    harness.send(QuizIntent::Answer(key("answer_a"))).await;
    assert_eq!(harness.score(), 1);

    harness.send(QuizIntent::GoHome).await;
    let html = harness.render();
    assert!(html.contains("Get Random Quiz"), "missing start screen in {html}");
    assert!(!html.contains("Question number"), "question still shown in {html}");
    assert_eq!(harness.score(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn answers_without_a_quiz_are_ignored() {
    let mut harness = setup_view_harness(FakeSource::Questions(Vec::new()), QuizParams::default());

    harness.send(QuizIntent::Answer(key("answer_a"))).await;
    let html = harness.render();
    assert!(html.contains("Get Random Quiz"), "missing start screen in {html}");
    assert_eq!(harness.score(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_failure_stays_on_start_with_retry() {
    let mut harness = setup_view_harness(FakeSource::Down, QuizParams::default());

    harness.send(QuizIntent::StartRandom).await;
    let html = harness.render();
    assert!(html.contains("Could not load questions"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(html.contains("Get Random Quiz"), "missing start screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_question_set_reports_no_questions() {
    let mut harness = setup_view_harness(FakeSource::Questions(Vec::new()), QuizParams::default());

    harness.send(QuizIntent::StartFiltered).await;
    let html = harness.render();
    assert!(html.contains("No questions found"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_start_while_loading_is_dropped() {
    let source = Arc::new(ScriptedSource::new(vec![question(1, "answer_a")]).gated());
    let mut harness = setup_view_harness_with(source.clone(), QuizParams::default());

    harness.send(QuizIntent::StartRandom).await;
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading status in {html}");

    harness.send(QuizIntent::StartFiltered).await;
    assert_eq!(source.requests(), vec![QuizRequest::Random]);

    source.release(1);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question number 1"), "missing question in {html}");
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn retry_repeats_the_failed_request() {
    let params = QuizParams::new(Difficulty::Hard, Some(Category::Php));
    let source = Arc::new(ScriptedSource::new(vec![question(1, "answer_b")]).failing_first(1));
    let mut harness = setup_view_harness_with(source.clone(), params);

    harness.send(QuizIntent::StartFiltered).await;
    let html = harness.render();
    assert!(html.contains("Could not load questions"), "missing error in {html}");

    harness.send(QuizIntent::Retry).await;
    let expected = QuizRequest::Filtered(params);
    assert_eq!(source.requests(), vec![expected, expected]);
    let html = harness.render();
    assert!(html.contains("Question number 1"), "missing question in {html}");
    assert!(!html.contains("Could not load questions"), "stale error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn go_home_discards_fetch_in_flight() {
    let source = Arc::new(ScriptedSource::new(vec![question(1, "answer_a")]).gated());
    let mut harness = setup_view_harness_with(source.clone(), QuizParams::default());

    harness.send(QuizIntent::StartRandom).await;
    harness.send(QuizIntent::GoHome).await;
    let html = harness.render();
    assert!(!html.contains("Loading..."), "still loading in {html}");

    source.release(1);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Get Random Quiz"), "left the start screen in {html}");
    assert!(!html.contains("Question number"), "stale quiz started in {html}");

    source.release(1);
    harness.send(QuizIntent::StartRandom).await;
    let html = harness.render();
    assert!(html.contains("Question number 1"), "missing question in {html}");
    assert_eq!(source.requests().len(), 2);
}
