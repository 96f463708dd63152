mod detail_vm;
mod lesson_list_vm;
mod practice_vm;
mod time_fmt;
mod upload_vm;

pub use detail_vm::{LessonDetailVm, map_lesson_detail};
pub use lesson_list_vm::{LessonCardVm, LessonListVm, map_lesson_list};
pub use practice_vm::{EMPTY_PRACTICE_MESSAGE, PracticeCardVm, PracticeHubVm, map_practice_hub};
pub use time_fmt::format_submitted_at;
pub use upload_vm::{UploadAction, UploadSheetVm, map_upload_sheet};
