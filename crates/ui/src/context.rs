use std::sync::Arc;

use chrono::Local;
use lesson_core::model::{Lesson, TerminalOutcome};
use log::debug;
use services::{SessionStore, SubmitError};

use crate::routes::Route;
use crate::vm::{
    LessonDetailVm, LessonListVm, PracticeHubVm, UploadSheetVm, map_lesson_detail,
    map_lesson_list, map_practice_hub, map_upload_sheet,
};

pub trait UiApp: Send + Sync {
    fn session_store(&self) -> Arc<SessionStore>;
}

/// Presentation-facing handle: reads store snapshots as view-models and
/// forwards user intents back to the store.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<SessionStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            store: app.session_store(),
        }
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn lesson_list(&self) -> LessonListVm {
        map_lesson_list(&self.store.lesson_list())
    }

    /// Resolve a details route to its lesson, if it is loaded.
    #[must_use]
    pub fn lesson_for(&self, route: &Route) -> Option<Arc<Lesson>> {
        match route {
            Route::Details { title } => self.store.find_lesson_by_title(title),
            Route::Lessons | Route::Practice => None,
        }
    }

    #[must_use]
    pub fn lesson_detail(&self, route: &Route) -> Option<LessonDetailVm> {
        self.lesson_for(route).map(|lesson| map_lesson_detail(&lesson))
    }

    /// Start playback for the lesson behind `route`. Returns false if it is not loaded.
    pub fn play(&self, route: &Route) -> bool {
        let Some(lesson) = self.lesson_for(route) else {
            debug!("no lesson to play for {route:?}");
            return false;
        };
        self.store.prepare_player(lesson.video_url());
        true
    }

    #[must_use]
    pub fn upload_sheet(&self) -> UploadSheetVm {
        map_upload_sheet(self.store.upload_state())
    }

    /// Upload (or retry) from the sheet.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the store rejects or cancels the attempt.
    pub async fn submit(
        &self,
        lesson: Arc<Lesson>,
        notes: &str,
    ) -> Result<TerminalOutcome, SubmitError> {
        self.store.submit_practice(lesson, notes).await
    }

    /// The sheet was closed: forget the upload state.
    pub fn dismiss_upload_sheet(&self) {
        self.store.reset_upload();
    }

    #[must_use]
    pub fn practice_hub(&self) -> PracticeHubVm {
        map_practice_hub(&self.store.history(), &Local)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
