use quiz_core::model::{
    AnswerOption, AppSettings, Language, LocalizedText, QuestionBank, QuestionRecord,
};
use quiz_core::time::fixed_clock;
use services::AppServices;
use storage::repository::Storage;

use super::test_harness::{
    ViewHarness, setup_quiz_harness, setup_quiz_harness_after, setup_quiz_harness_with,
};
use crate::vm::QuizIntent;

fn sk(text: &str) -> LocalizedText {
    LocalizedText::new().with(Language::Sk, text)
}

fn record(prompt: &str, correct: &str) -> QuestionRecord {
    QuestionRecord::new(
        sk(prompt),
        vec![
            AnswerOption::new(sk(correct), true),
            AnswerOption::new(sk("Charles Babbage"), false),
        ],
        sk(correct),
    )
}

async fn harness_after(records: Vec<QuestionRecord>, intents: Vec<QuizIntent>) -> ViewHarness {
    let bank = QuestionBank::new(records).expect("bank");
    let services = AppServices::from_storage(Storage::in_memory(), fixed_clock())
        .await
        .expect("services")
        .with_question_bank(bank);
    let mut harness = setup_quiz_harness_after(services, intents);
    harness.rebuild();
    harness
}

fn select(text: &str) -> QuizIntent {
    QuizIntent::Select(text.to_string())
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_quiz_harness(None).await;
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Kvíz o umelej inteligencii"),
        "missing title in {html}"
    );
    let has_question = harness
        .services
        .question_bank()
        .records()
        .iter()
        .any(|record| html.contains(record.question(Language::Sk)));
    assert!(has_question, "missing question text in {html}");
    assert!(html.contains("quiz-progress"), "missing progress in {html}");
    assert!(!html.contains("quiz-next"), "next button before answering in {html}");
    assert!(html.contains("Polski"), "missing language switcher in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_quiz_harness(Some(QuestionBank::default())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Kvíz momentálne neobsahuje žiadne otázky."),
        "missing empty message in {html}"
    );
    assert!(!html.contains("quiz-question"), "rendered a question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_uses_stored_language() {
    let storage = Storage::in_memory();
    storage
        .app_settings
        .save_settings(&AppSettings::new(Language::Pl))
        .await
        .expect("save settings");
    let services = AppServices::from_storage(storage, fixed_clock())
        .await
        .expect("services");

    let mut harness = setup_quiz_harness_with(services);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(harness.services.language(), Language::Pl);
    assert!(
        html.contains("Quiz o sztucznej inteligencji"),
        "missing polish title in {html}"
    );
    assert!(html.contains("Slovensky"), "missing switcher in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_locked_correct_answer() {
    let harness = harness_after(
        vec![record("Kto navrhol Turingov test?", "Alan Turing")],
        vec![select("Alan Turing")],
    )
    .await;
    let html = harness.render();

    assert!(html.contains("quiz-answer--correct"), "no correct mark in {html}");
    assert!(!html.contains("quiz-answer--wrong"), "unexpected wrong mark in {html}");
    assert!(html.contains("disabled"), "answers not disabled in {html}");
    assert!(html.contains("quiz-next"), "missing next button in {html}");
    assert!(html.contains("Zobraziť výsledky"), "missing results label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_locked_wrong_answer() {
    let harness = harness_after(
        vec![
            record("Kto navrhol Turingov test?", "Alan Turing"),
            record("Kto vymyslel pojem umelá inteligencia?", "John McCarthy"),
        ],
        vec![select("Charles Babbage")],
    )
    .await;
    let html = harness.render();

    assert!(html.contains("quiz-answer--wrong"), "no wrong mark in {html}");
    assert!(!html.contains("quiz-answer--correct"), "correct answer revealed in {html}");
    assert!(html.contains("Ďalšia otázka"), "missing next label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_final_score() {
    let harness = harness_after(
        vec![record("Kto navrhol Turingov test?", "Alan Turing")],
        vec![select("Alan Turing"), QuizIntent::Advance],
    )
    .await;
    let html = harness.render();

    assert!(html.contains("Kvíz ukončený"), "missing end heading in {html}");
    assert!(html.contains("Skóre: 1 z 1"), "missing score in {html}");
    assert!(html.contains("Začať znova"), "missing restart button in {html}");
    assert!(!html.contains("quiz-question"), "question still shown in {html}");
}
