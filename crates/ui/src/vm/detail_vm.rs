use lesson_core::model::Lesson;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub title: String,
    pub byline: String,
    pub cover_image_url: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

#[must_use]
pub fn map_lesson_detail(lesson: &Lesson) -> LessonDetailVm {
    LessonDetailVm {
        title: lesson.title().to_string(),
        byline: format!("with {}", lesson.mentor()),
        cover_image_url: lesson.image_url().to_string(),
        thumbnail_url: lesson.thumbnail_url().to_string(),
        video_url: lesson.video_url().to_string(),
    }
}
