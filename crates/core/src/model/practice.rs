use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::ids::SubmissionId;
use super::lesson::Lesson;

/// A successful practice upload: the lesson, the learner's notes, and when it landed.
///
/// The lesson is shared with the lesson list rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSubmission {
    id: SubmissionId,
    lesson: Arc<Lesson>,
    notes: String,
    submitted_at: DateTime<Utc>,
}

impl PracticeSubmission {
    #[must_use]
    pub fn new(
        id: SubmissionId,
        lesson: Arc<Lesson>,
        notes: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            lesson,
            notes: notes.into(),
            submitted_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    #[must_use]
    pub fn lesson(&self) -> &Arc<Lesson> {
        &self.lesson
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// True when the notes hold anything other than whitespace.
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn shares_lesson_with_caller() {
        let lesson = Arc::new(Lesson::new("Jane", "Scales", "t", "i", "v"));
        let submission =
            PracticeSubmission::new(SubmissionId::new(1), Arc::clone(&lesson), "", fixed_now());
        assert!(Arc::ptr_eq(submission.lesson(), &lesson));
        assert!(!submission.has_notes());
        assert_eq!(submission.submitted_at(), fixed_now());
    }

    #[test]
    fn blank_notes_are_not_notes() {
        let lesson = Arc::new(Lesson::new("Jane", "Scales", "t", "i", "v"));
        let blank =
            PracticeSubmission::new(SubmissionId::new(1), Arc::clone(&lesson), "  \n", fixed_now());
        let filled =
            PracticeSubmission::new(SubmissionId::new(2), lesson, "slow tempo", fixed_now());
        assert!(!blank.has_notes());
        assert!(filled.has_notes());
        assert_eq!(filled.notes(), "slow tempo");
    }
}
