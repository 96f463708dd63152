use std::fmt::Display;

use chrono::TimeZone;
use lesson_core::model::{PracticeSubmission, SubmissionId};

use super::time_fmt::format_submitted_at;

pub const EMPTY_PRACTICE_MESSAGE: &str = "Your submitted practices will appear here.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeCardVm {
    pub id: SubmissionId,
    pub title: String,
    pub mentor: String,
    pub thumbnail_url: String,
    /// `None` when the learner left the notes blank.
    pub notes: Option<String>,
    pub submitted_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeHubVm {
    Empty { message: &'static str },
    Cards(Vec<PracticeCardVm>),
}

/// Map the history (oldest first, as stored) to newest-first cards.
#[must_use]
pub fn map_practice_hub<Tz>(history: &[PracticeSubmission], zone: &Tz) -> PracticeHubVm
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if history.is_empty() {
        return PracticeHubVm::Empty {
            message: EMPTY_PRACTICE_MESSAGE,
        };
    }

    let cards = history
        .iter()
        .rev()
        .map(|submission| {
            let lesson = submission.lesson();
            PracticeCardVm {
                id: submission.id(),
                title: lesson.title().to_string(),
                mentor: lesson.mentor().to_string(),
                thumbnail_url: lesson.thumbnail_url().to_string(),
                notes: submission
                    .has_notes()
                    .then(|| submission.notes().to_string()),
                submitted_label: format!(
                    "Submitted: {}",
                    format_submitted_at(submission.submitted_at(), zone)
                ),
            }
        })
        .collect();

    PracticeHubVm::Cards(cards)
}
