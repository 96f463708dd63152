mod ids;
mod lesson;
mod list_state;
mod practice;
mod upload;

pub use ids::SubmissionId;
pub use lesson::{Lesson, LessonsResponse};
pub use list_state::{LOAD_FAILED_MESSAGE, LessonListState};
pub use practice::PracticeSubmission;
pub use upload::{TerminalOutcome, UploadState};
