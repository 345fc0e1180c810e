use std::time::{Duration, Instant};

/// Minimum interval between accepted frames.
///
/// 25 ms caps rendering near 40 fps, a midpoint between 30 and 60 fps that
/// bounds CPU/GPU cost in constrained mobile ad webviews.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(25);

/// Accept/reject gate for animation ticks.
///
/// Only the timestamp of the last *accepted* tick is tracked; rejected ticks
/// leave the baseline untouched, so acceptance re-bases from each accepted
/// tick. Frames are dropped, never batched or replayed.
#[derive(Debug, Clone)]
pub struct ThrottleClock {
    threshold: Duration,
    last_accepted: Option<Instant>,
}

impl ThrottleClock {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THROTTLE)
    }

    pub fn with_threshold(threshold: Duration) -> Self {
        Self {
            threshold,
            last_accepted: None,
        }
    }

    /// Accepts `now` iff more than the threshold elapsed since the last
    /// accepted tick. The first tick is always accepted.
    pub fn accept(&mut self, now: Instant) -> bool {
        let accepted = match self.last_accepted {
            None => true,
            Some(prev) => now.saturating_duration_since(prev) > self.threshold,
        };

        if accepted {
            self.last_accepted = Some(now);
        }
        accepted
    }

    /// Clears the baseline; the next tick is accepted unconditionally.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

impl Default for ThrottleClock {
    fn default() -> Self {
        Self::new()
    }
}
