use lesson_core::model::{Lesson, LessonListState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub title: String,
    pub mentor: String,
    pub thumbnail_url: String,
}

impl LessonCardVm {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            title: lesson.title().to_string(),
            mentor: lesson.mentor().to_string(),
            thumbnail_url: lesson.thumbnail_url().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonListVm {
    Loading,
    Error { message: String },
    Lessons(Vec<LessonCardVm>),
}

#[must_use]
pub fn map_lesson_list(state: &LessonListState) -> LessonListVm {
    match state {
        LessonListState::Loading => LessonListVm::Loading,
        LessonListState::Failed(message) => LessonListVm::Error {
            message: message.clone(),
        },
        LessonListState::Loaded(lessons) => LessonListVm::Lessons(
            lessons
                .iter()
                .map(|lesson| LessonCardVm::from_lesson(lesson))
                .collect(),
        ),
    }
}
