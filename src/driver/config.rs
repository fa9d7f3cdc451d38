// Driver configuration

use std::time::Duration;

/// Fastest cadence `set_speed` accepts
pub const MIN_SPEED: Duration = Duration::from_millis(10);
/// Slowest cadence `set_speed` accepts
pub const MAX_SPEED: Duration = Duration::from_secs(10);

/// Tunables for a [`StepDriver`](super::StepDriver)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Delay between automatic steps while playing
    pub speed: Duration,
    /// Byte budget for the replay history
    pub history_limit: usize,
}

impl DriverConfig {
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = clamp_speed(speed);
        self
    }

    pub fn with_history_limit(mut self, bytes: usize) -> Self {
        self.history_limit = bytes;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            speed: Duration::from_millis(500),
            history_limit: 64 * 1024 * 1024,
        }
    }
}

pub fn clamp_speed(speed: Duration) -> Duration {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}
