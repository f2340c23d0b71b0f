// Time source for request timestamps

use chrono::Utc;

/// Supplies the `auth_timestamp` for signed requests.
pub trait Clock: Send + Sync {
    /// Current Unix time in seconds
    fn now(&self) -> u64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Clamp pre-epoch clocks instead of wrapping.
        Utc::now().timestamp().max(0) as u64
    }
}

/// Always returns the same instant. Makes signatures reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
