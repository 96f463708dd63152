/// Final resolution of an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalOutcome {
    Succeeded,
    Failed,
}

impl TerminalOutcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Upload lifecycle: `Idle -> InProgress(0..=100) -> Succeeded | Failed -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    InProgress(u8),
    Succeeded,
    Failed,
}

impl UploadState {
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        match self {
            Self::InProgress(percent) => Some(*percent),
            _ => None,
        }
    }
}

impl From<TerminalOutcome> for UploadState {
    fn from(outcome: TerminalOutcome) -> Self {
        match outcome {
            TerminalOutcome::Succeeded => Self::Succeeded,
            TerminalOutcome::Failed => Self::Failed,
        }
    }
}
