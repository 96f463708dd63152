use std::sync::Mutex;

use log::info;

/// Video playback capability owned by the presentation layer.
///
/// The store only ever calls `prepare`; `pause`, `resume` and `release` are
/// bound to UI lifecycle events by whoever owns the player.
pub trait MediaPlayer: Send + Sync {
    /// Load `video_url` and start playing once ready.
    fn prepare(&self, video_url: &str);
    fn pause(&self);
    fn resume(&self);
    fn release(&self);
}

/// Player for headless runs: remembers what it was asked to play and logs lifecycle calls.
#[derive(Debug, Default)]
pub struct LoggingPlayer {
    current: Mutex<Option<String>>,
}

impl LoggingPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl MediaPlayer for LoggingPlayer {
    fn prepare(&self, video_url: &str) {
        info!("player: prepare {video_url}");
        *self
            .current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(video_url.to_string());
    }

    fn pause(&self) {
        info!("player: pause");
    }

    fn resume(&self) {
        info!("player: resume");
    }

    fn release(&self) {
        info!("player: release");
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
    }
}
