use std::time::{Duration, Instant};

/// How often the controller's elapsed counter advances.
pub const TICK_RATE: Duration = Duration::from_secs(1);

/// Seconds elapsed in the current session, plus the instant the current
/// tick interval started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTimer {
    seconds: u64,
    last_tick: Instant,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(now: Instant) -> Self {
        Self {
            seconds: 0,
            last_tick: now,
        }
    }

    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    /// Zero the counter and start a fresh tick interval.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.seconds = 0;
        self.last_tick = now;
    }

    /// Time left at `now` before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        TICK_RATE.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Tick once if a full interval has passed by `now`.
    pub fn advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < TICK_RATE {
            return false;
        }
        self.tick();
        self.last_tick += TICK_RATE;
        true
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// `Time: M:SS`, minutes unpadded.
    pub fn label(&self) -> String {
        format!("Time: {}", format_elapsed(self.seconds))
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
