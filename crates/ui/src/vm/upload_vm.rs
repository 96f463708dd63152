use lesson_core::model::UploadState;

/// Button offered by the upload sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadAction {
    /// Start an upload with the typed notes.
    Upload,
    /// Close the sheet (resets the upload).
    Done,
    /// Submit again with the same notes.
    Retry,
}

impl UploadAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UploadAction::Upload => "Upload File",
            UploadAction::Done => "Done",
            UploadAction::Retry => "Retry",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadSheetVm {
    pub heading: &'static str,
    pub status_label: Option<String>,
    /// Fraction in `0.0..=1.0` while uploading.
    pub progress: Option<f32>,
    pub shows_notes_input: bool,
    pub action: Option<UploadAction>,
    pub is_error: bool,
}

#[must_use]
pub fn map_upload_sheet(state: UploadState) -> UploadSheetVm {
    let base = UploadSheetVm {
        heading: "Submit Your Practice",
        status_label: None,
        progress: None,
        shows_notes_input: false,
        action: None,
        is_error: false,
    };

    match state {
        UploadState::Idle => UploadSheetVm {
            shows_notes_input: true,
            action: Some(UploadAction::Upload),
            ..base
        },
        UploadState::InProgress(percent) => UploadSheetVm {
            status_label: Some(format!("Uploading... {percent}%")),
            progress: Some(f32::from(percent.min(100)) / 100.0),
            ..base
        },
        UploadState::Succeeded => UploadSheetVm {
            status_label: Some("✅ Upload Successful!".to_string()),
            action: Some(UploadAction::Done),
            ..base
        },
        UploadState::Failed => UploadSheetVm {
            status_label: Some("❌ Upload Failed".to_string()),
            action: Some(UploadAction::Retry),
            is_error: true,
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_offers_notes_and_upload() {
        let vm = map_upload_sheet(UploadState::Idle);
        assert!(vm.shows_notes_input);
        assert_eq!(vm.action.map(UploadAction::label), Some("Upload File"));
        assert_eq!(vm.status_label, None);
    }

    #[test]
    fn progress_has_label_and_fraction_without_action() {
        let vm = map_upload_sheet(UploadState::InProgress(45));
        assert_eq!(vm.status_label.as_deref(), Some("Uploading... 45%"));
        assert!((vm.progress.unwrap() - 0.45).abs() < f32::EPSILON);
        assert_eq!(vm.action, None);
        assert!(!vm.shows_notes_input);
    }

    #[test]
    fn terminal_states_offer_done_or_retry() {
        let ok = map_upload_sheet(UploadState::Succeeded);
        assert_eq!(ok.status_label.as_deref(), Some("✅ Upload Successful!"));
        assert_eq!(ok.action, Some(UploadAction::Done));
        assert!(!ok.is_error);

        let failed = map_upload_sheet(UploadState::Failed);
        assert_eq!(failed.status_label.as_deref(), Some("❌ Upload Failed"));
        assert_eq!(failed.action, Some(UploadAction::Retry));
        assert!(failed.is_error);
    }
}
