use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lesson_core::model::{Lesson, TerminalOutcome, UploadState};
use services::{
    FetchError, FixedOutcome, LessonSource, MediaPlayer, SessionStore, SimulatorConfig,
    SubmissionSimulator,
};
use ui::vm::{LessonListVm, PracticeHubVm, UploadAction};
use ui::{Route, UiApp, build_app_context};

struct OneLesson;

#[async_trait]
impl LessonSource for OneLesson {
    async fn fetch(&self) -> Result<Vec<Lesson>, FetchError> {
        Ok(vec![Lesson::new(
            "Jane",
            "Scales",
            "https://cdn.example.com/s-t.jpg",
            "https://cdn.example.com/s.jpg",
            "https://cdn.example.com/s.mp4",
        )])
    }
}

#[derive(Default)]
struct RecordingPlayer {
    prepared: Mutex<Vec<String>>,
}

impl MediaPlayer for RecordingPlayer {
    fn prepare(&self, video_url: &str) {
        self.prepared.lock().unwrap().push(video_url.to_string());
    }
    fn pause(&self) {}
    fn resume(&self) {}
    fn release(&self) {}
}

struct TestApp {
    store: Arc<SessionStore>,
}

impl UiApp for TestApp {
    fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.store)
    }
}

fn app(outcome: TerminalOutcome, player: Arc<RecordingPlayer>) -> Arc<dyn UiApp> {
    let simulator = SubmissionSimulator::new(
        SimulatorConfig::default().with_interval(Duration::ZERO),
        Arc::new(FixedOutcome(outcome)),
    );
    let store = SessionStore::new(Arc::new(OneLesson), simulator, player);
    Arc::new(TestApp {
        store: Arc::new(store),
    })
}

#[tokio::test]
async fn browse_play_submit_and_review() {
    let player = Arc::new(RecordingPlayer::default());
    let ctx = build_app_context(&app(TerminalOutcome::Succeeded, Arc::clone(&player)));

    assert_eq!(ctx.lesson_list(), LessonListVm::Loading);
    ctx.session_store().initialize().await;
    let LessonListVm::Lessons(cards) = ctx.lesson_list() else {
        panic!("expected lessons");
    };
    assert_eq!(cards[0].title, "Scales");

    let route = Route::parse(&Route::Details {
        title: cards[0].title.clone(),
    }
    .path())
    .unwrap();
    let detail = ctx.lesson_detail(&route).unwrap();
    assert_eq!(detail.byline, "with Jane");

    assert!(ctx.play(&route));
    assert_eq!(
        *player.prepared.lock().unwrap(),
        vec!["https://cdn.example.com/s.mp4".to_string()]
    );

    assert_eq!(ctx.upload_sheet().action, Some(UploadAction::Upload));
    let lesson = ctx.lesson_for(&route).unwrap();
    let outcome = ctx.submit(lesson, "practiced scales").await.unwrap();
    assert_eq!(outcome, TerminalOutcome::Succeeded);
    assert_eq!(ctx.upload_sheet().action, Some(UploadAction::Done));

    ctx.dismiss_upload_sheet();
    assert_eq!(ctx.session_store().upload_state(), UploadState::Idle);

    let PracticeHubVm::Cards(practice) = ctx.practice_hub() else {
        panic!("expected practice cards");
    };
    assert_eq!(practice.len(), 1);
    assert_eq!(practice[0].notes.as_deref(), Some("practiced scales"));
    assert!(practice[0].submitted_label.starts_with("Submitted: "));
}

#[tokio::test]
async fn failed_upload_offers_retry_and_keeps_hub_empty() {
    let ctx = build_app_context(&app(
        TerminalOutcome::Failed,
        Arc::new(RecordingPlayer::default()),
    ));
    ctx.session_store().initialize().await;
    let route = Route::Details {
        title: "Scales".into(),
    };
    let lesson = ctx.lesson_for(&route).unwrap();

    ctx.submit(lesson, "").await.unwrap();

    let sheet = ctx.upload_sheet();
    assert_eq!(sheet.action, Some(UploadAction::Retry));
    assert!(sheet.is_error);
    assert!(matches!(ctx.practice_hub(), PracticeHubVm::Empty { .. }));
}

#[tokio::test]
async fn unknown_title_has_no_detail_and_does_not_play() {
    let player = Arc::new(RecordingPlayer::default());
    let ctx = build_app_context(&app(TerminalOutcome::Succeeded, Arc::clone(&player)));
    ctx.session_store().initialize().await;

    let route = Route::Details {
        title: "Nope".into(),
    };
    assert!(ctx.lesson_detail(&route).is_none());
    assert!(!ctx.play(&route));
    assert!(!ctx.play(&Route::Practice));
    assert!(player.prepared.lock().unwrap().is_empty());
}
