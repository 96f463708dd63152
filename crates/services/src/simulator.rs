use std::env;
use std::sync::Arc;
use std::time::Duration;

use lesson_core::model::TerminalOutcome;
use rand::Rng;

use crate::cancel::CancelToken;

/// Pacing for the simulated upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Percent added per tick. Clamped to `1..=100` when the sequence is built.
    pub step: u8,
    /// Delay before each tick.
    pub interval: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            step: 5,
            interval: Duration::from_millis(100),
        }
    }
}

impl SimulatorConfig {
    /// Defaults, with the tick interval overridable through `LESSONS_UPLOAD_INTERVAL_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = env::var("LESSONS_UPLOAD_INTERVAL_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.interval = Duration::from_millis(ms);
        }
        config
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Progress values the upload reports: `step, 2*step, ..., 100`.
    #[must_use]
    pub fn progress_steps(&self) -> Vec<u8> {
        let step = u16::from(self.step.clamp(1, 100));
        let mut steps: Vec<u8> = (1..)
            .map(|i| i * step)
            .take_while(|percent| *percent < 100)
            .filter_map(|percent| u8::try_from(percent).ok())
            .collect();
        steps.push(100);
        steps
    }
}

/// Decides how an upload ends.
pub trait OutcomeStrategy: Send + Sync {
    fn decide(&self) -> TerminalOutcome;
}

impl<F> OutcomeStrategy for F
where
    F: Fn() -> TerminalOutcome + Send + Sync,
{
    fn decide(&self) -> TerminalOutcome {
        self()
    }
}

/// Fair coin flip.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOutcome;

impl OutcomeStrategy for RandomOutcome {
    fn decide(&self) -> TerminalOutcome {
        if rand::rng().random_bool(0.5) {
            TerminalOutcome::Succeeded
        } else {
            TerminalOutcome::Failed
        }
    }
}

/// Always resolves to the same outcome.
#[derive(Clone, Copy, Debug)]
pub struct FixedOutcome(pub TerminalOutcome);

impl OutcomeStrategy for FixedOutcome {
    fn decide(&self) -> TerminalOutcome {
        self.0
    }
}

/// Time-stepped stand-in for a real upload.
#[derive(Clone)]
pub struct SubmissionSimulator {
    config: SimulatorConfig,
    strategy: Arc<dyn OutcomeStrategy>,
}

impl SubmissionSimulator {
    #[must_use]
    pub fn new(config: SimulatorConfig, strategy: Arc<dyn OutcomeStrategy>) -> Self {
        Self { config, strategy }
    }

    /// Sleep, report, repeat until 100, then draw the outcome.
    ///
    /// Returns `None` if `cancel` fires first; nothing is reported after that.
    pub async fn run<F>(&self, cancel: &CancelToken, mut on_progress: F) -> Option<TerminalOutcome>
    where
        F: FnMut(u8),
    {
        for percent in self.config.progress_steps() {
            tokio::select! {
                biased;
                () = cancel.cancelled() => return None,
                () = tokio::time::sleep(self.config.interval) => {}
            }
            if cancel.is_cancelled() {
                return None;
            }
            on_progress(percent);
        }

        if cancel.is_cancelled() {
            return None;
        }
        Some(self.strategy.decide())
    }
}
