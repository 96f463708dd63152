#![forbid(unsafe_code)]

pub mod cancel;
pub mod error;
pub mod lesson_source;
pub mod media;
pub mod session_store;
pub mod simulator;

pub use lesson_core::Clock;

pub use cancel::CancelToken;
pub use error::{FetchError, SourceConfigError, SubmitError};
pub use lesson_source::{DEFAULT_LESSONS_URL, HttpLessonSource, LessonSource, LessonSourceConfig};
pub use media::{LoggingPlayer, MediaPlayer};
pub use session_store::SessionStore;
pub use simulator::{
    FixedOutcome, OutcomeStrategy, RandomOutcome, SimulatorConfig, SubmissionSimulator,
};
