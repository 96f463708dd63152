use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lesson_core::model::{
    Lesson, LessonListState, PracticeSubmission, SubmissionId, TerminalOutcome, UploadState,
};
use log::{debug, info, warn};
use tokio::sync::{broadcast, watch};

use crate::cancel::CancelToken;
use crate::error::SubmitError;
use crate::lesson_source::LessonSource;
use crate::media::MediaPlayer;
use crate::simulator::SubmissionSimulator;
use crate::Clock;

const UPLOAD_EVENT_CAPACITY: usize = 64;

/// Owns lesson list, upload state and practice history for one app session.
///
/// Presentation code reads snapshots or subscribes; every mutation goes
/// through the command methods here.
///
/// Concurrency:
/// - at most one `submit_practice` runs at a time; a second call while one is
///   in flight gets `SubmitError::Busy`
/// - `reset_upload` cancels the in-flight sequence, which then publishes nothing more
pub struct SessionStore {
    clock: Clock,
    source: Arc<dyn LessonSource>,
    simulator: SubmissionSimulator,
    player: Arc<dyn MediaPlayer>,

    lessons: watch::Sender<LessonListState>,
    upload: watch::Sender<UploadState>,
    upload_events: broadcast::Sender<UploadState>,
    history: watch::Sender<Arc<[PracticeSubmission]>>,

    initialized: AtomicBool,
    in_flight: Mutex<Option<CancelToken>>,
    next_submission_id: AtomicU64,
}

impl SessionStore {
    #[must_use]
    pub fn new(
        source: Arc<dyn LessonSource>,
        simulator: SubmissionSimulator,
        player: Arc<dyn MediaPlayer>,
    ) -> Self {
        let (lessons, _) = watch::channel(LessonListState::Loading);
        let (upload, _) = watch::channel(UploadState::Idle);
        let (upload_events, _) = broadcast::channel(UPLOAD_EVENT_CAPACITY);
        let (history, _) = watch::channel::<Arc<[PracticeSubmission]>>(Arc::from(Vec::new()));

        Self {
            clock: Clock::default(),
            source,
            simulator,
            player,
            lessons,
            upload,
            upload_events,
            history,
            initialized: AtomicBool::new(false),
            in_flight: Mutex::new(None),
            next_submission_id: AtomicU64::new(1),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    //
    // ─── COMMANDS ──────────────────────────────────────────────────────────────
    //

    /// Fetch lessons once and publish `Loaded` or `Failed`.
    ///
    /// Later calls do not fetch again; they return the current state.
    pub async fn initialize(&self) -> LessonListState {
        if self.initialized.swap(true, Ordering::AcqRel) {
            debug!("lesson list already initialized; skipping fetch");
            return self.lesson_list();
        }

        self.lessons.send_replace(LessonListState::Loading);
        let next = match self.source.fetch().await {
            Ok(lessons) => {
                info!("loaded {} lessons", lessons.len());
                LessonListState::loaded(lessons)
            }
            Err(err) => {
                warn!("lesson fetch failed: {err}");
                LessonListState::failed()
            }
        };
        self.lessons.send_replace(next.clone());
        next
    }

    /// Exact-title lookup over the loaded lessons.
    #[must_use]
    pub fn find_lesson_by_title(&self, title: &str) -> Option<Arc<Lesson>> {
        self.lessons.borrow().find_by_title(title)
    }

    /// Run a simulated upload for `lesson` and record it on success.
    ///
    /// Publishes `InProgress(0)` on acceptance, each simulator tick, then the
    /// terminal state. A successful run appends to the history before
    /// `Succeeded` is published.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Busy` if another upload is running, or
    /// `SubmitError::Cancelled` if `reset_upload` stopped this one.
    ///
    /// Dropping the returned future mid-upload cancels it and publishes `Idle`.
    pub async fn submit_practice(
        &self,
        lesson: Arc<Lesson>,
        notes: impl Into<String>,
    ) -> Result<TerminalOutcome, SubmitError> {
        let notes = notes.into();
        let token = {
            let mut in_flight = self.lock_in_flight();
            if in_flight.is_some() {
                warn!("rejecting practice upload for {:?}: busy", lesson.title());
                return Err(SubmitError::Busy);
            }
            let token = CancelToken::new();
            *in_flight = Some(token.clone());
            self.publish_upload(UploadState::InProgress(0));
            token
        };
        // Frees the slot if this future is dropped before reaching a terminal state.
        let _guard = InFlightGuard {
            store: self,
            token: token.clone(),
        };
        info!("practice upload started for {:?}", lesson.title());

        let outcome = self
            .simulator
            .run(&token, |percent| {
                self.publish_if_current(&token, UploadState::InProgress(percent));
            })
            .await;

        let Some(outcome) = outcome else {
            info!("practice upload for {:?} cancelled", lesson.title());
            return Err(SubmitError::Cancelled);
        };

        let mut in_flight = self.lock_in_flight();
        if token.is_cancelled() {
            info!("practice upload for {:?} cancelled", lesson.title());
            return Err(SubmitError::Cancelled);
        }
        *in_flight = None;

        if outcome.is_success() {
            let id = SubmissionId::new(self.next_submission_id.fetch_add(1, Ordering::Relaxed));
            let submission = PracticeSubmission::new(id, lesson, notes, self.clock.now());
            debug!("recording practice submission {id}");
            self.history.send_modify(|history| {
                let mut next = history.to_vec();
                next.push(submission);
                *history = Arc::from(next);
            });
        }
        info!("practice upload finished: {outcome:?}");
        self.publish_upload(UploadState::from(outcome));
        Ok(outcome)
    }

    /// Force the upload state back to `Idle`, stopping any in-flight upload.
    pub fn reset_upload(&self) {
        let mut in_flight = self.lock_in_flight();
        if let Some(token) = in_flight.take() {
            info!("cancelling in-flight practice upload");
            token.cancel();
        }
        self.publish_upload(UploadState::Idle);
    }

    /// Hand `video_url` to the media player.
    pub fn prepare_player(&self, video_url: &str) {
        debug!("preparing player for {video_url}");
        self.player.prepare(video_url);
    }

    //
    // ─── SNAPSHOTS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn lesson_list(&self) -> LessonListState {
        self.lessons.borrow().clone()
    }

    #[must_use]
    pub fn upload_state(&self) -> UploadState {
        *self.upload.borrow()
    }

    /// Submissions in insertion order (oldest first).
    #[must_use]
    pub fn history(&self) -> Arc<[PracticeSubmission]> {
        Arc::clone(&*self.history.borrow())
    }

    /// Submissions newest first, for display.
    #[must_use]
    pub fn history_newest_first(&self) -> Vec<PracticeSubmission> {
        self.history.borrow().iter().rev().cloned().collect()
    }

    //
    // ─── SUBSCRIPTIONS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn subscribe_lessons(&self) -> watch::Receiver<LessonListState> {
        self.lessons.subscribe()
    }

    /// Latest upload state; intermediate values may be coalesced.
    #[must_use]
    pub fn subscribe_upload(&self) -> watch::Receiver<UploadState> {
        self.upload.subscribe()
    }

    /// Every upload state published after this call, in order.
    #[must_use]
    pub fn upload_events(&self) -> broadcast::Receiver<UploadState> {
        self.upload_events.subscribe()
    }

    #[must_use]
    pub fn subscribe_history(&self) -> watch::Receiver<Arc<[PracticeSubmission]>> {
        self.history.subscribe()
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, Option<CancelToken>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_if_current(&self, token: &CancelToken, state: UploadState) {
        let _in_flight = self.lock_in_flight();
        if !token.is_cancelled() {
            self.publish_upload(state);
        }
    }

    fn publish_upload(&self, state: UploadState) {
        self.upload.send_replace(state);
        // No receivers is fine.
        let _ = self.upload_events.send(state);
    }
}

/// Held by `submit_practice` from acceptance until it returns.
///
/// The terminal path clears `in_flight` itself, so on normal return the slot no
/// longer holds this token and dropping the guard is a no-op.
struct InFlightGuard<'a> {
    store: &'a SessionStore,
    token: CancelToken,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.store.lock_in_flight();
        if in_flight.as_ref().is_some_and(|held| held.same_as(&self.token)) {
            in_flight.take();
            self.token.cancel();
            info!("practice upload abandoned by caller; returning to idle");
            self.store.publish_upload(UploadState::Idle);
        }
    }
}
