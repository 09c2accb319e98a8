use std::sync::Arc;

use quiz_core::model::{Choice, MusicCatalog, Question, TypeTag};
use storage::InMemoryDataSource;

use super::test_harness::{setup_quiz_harness, setup_screen_harness};
use crate::vm::{ChoiceVm, QuestionVm, ResultVm, ScreenVm};

fn sample_source() -> InMemoryDataSource {
    let questions = vec![Question::new(
        "Pick a season",
        vec![
            Choice::new("Summer", TypeTag::Upbeat),
            Choice::new("Autumn", TypeTag::Melancholy),
        ],
    )];
    InMemoryDataSource::from_parts(&questions, &MusicCatalog::new()).unwrap()
}

#[test]
fn start_screen_renders_question_count() {
    let mut harness = setup_screen_harness(ScreenVm::Start { question_count: 5 });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Answer 5 quick questions"), "missing count in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[test]
fn question_screen_renders_choices() {
    let mut harness = setup_screen_harness(ScreenVm::Question(QuestionVm {
        progress_label: "Question 1 of 2".into(),
        text: "Pick a season".into(),
        choices: vec![
            ChoiceVm {
                text: "Summer".into(),
                tag: TypeTag::Upbeat,
            },
            ChoiceVm {
                text: "Autumn".into(),
                tag: TypeTag::Melancholy,
            },
        ],
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Pick a season"), "missing question in {html}");
    assert!(html.contains("Summer"), "missing choice in {html}");
    assert!(html.contains("Autumn"), "missing choice in {html}");
}

#[test]
fn result_screen_renders_track() {
    let mut harness = setup_screen_harness(ScreenVm::Result(ResultVm {
        type_label: "Chill".into(),
        title: "Drift".into(),
        artist: "Low Tide".into(),
        album_art_url: "drift.jpg".into(),
        album_art_alt: "Drift - Low Tide album art".into(),
        link: "https://youtu.be/drift".into(),
        has_track: true,
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your mood: Chill"), "missing type in {html}");
    assert!(html.contains("Drift"), "missing title in {html}");
    assert!(html.contains("https://youtu.be/drift"), "missing link in {html}");
    assert!(html.contains("drift.jpg"), "missing art in {html}");
}

#[test]
fn result_screen_without_track_hides_link() {
    let mut harness = setup_screen_harness(ScreenVm::Result(ResultVm {
        type_label: "Chill".into(),
        title: quiz_core::model::NO_RECOMMENDATION_TITLE.into(),
        artist: String::new(),
        album_art_url: String::new(),
        album_art_alt: String::new(),
        link: "#".into(),
        has_track: false,
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(quiz_core::model::NO_RECOMMENDATION_TITLE),
        "missing placeholder in {html}"
    );
    assert!(!html.contains("Listen on YouTube"), "unexpected link in {html}");
    assert!(html.contains("Start over"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_start_screen_after_load() {
    let mut harness = setup_quiz_harness(Arc::new(sample_source()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Answer 1 quick questions"), "missing start screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_retry_on_load_failure() {
    let mut harness = setup_quiz_harness(Arc::new(InMemoryDataSource::unreachable()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Could not load the quiz"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
