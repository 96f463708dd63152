use std::sync::Arc;

use super::lesson::Lesson;

/// User-facing message published when the lesson fetch fails for any reason.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load lessons. Please check your connection.";

/// Lifecycle of the lesson list.
///
/// Starts at `Loading` and moves to exactly one of `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LessonListState {
    #[default]
    Loading,
    Loaded(Vec<Arc<Lesson>>),
    Failed(String),
}

impl LessonListState {
    /// Build the loaded state, keeping the server order verbatim.
    #[must_use]
    pub fn loaded(lessons: Vec<Lesson>) -> Self {
        Self::Loaded(lessons.into_iter().map(Arc::new).collect())
    }

    #[must_use]
    pub fn failed() -> Self {
        Self::Failed(LOAD_FAILED_MESSAGE.to_string())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Lessons when loaded, `None` otherwise.
    #[must_use]
    pub fn lessons(&self) -> Option<&[Arc<Lesson>]> {
        match self {
            Self::Loaded(lessons) => Some(lessons),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Linear search by exact title; absent unless loaded.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<Arc<Lesson>> {
        self.lessons()?
            .iter()
            .find(|lesson| lesson.title() == title)
            .map(Arc::clone)
    }
}
