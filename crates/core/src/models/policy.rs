use chrono::Duration;

/// Default minimum gap between now and a same-day slot
pub const DEFAULT_LEAD_TIME_MINUTES: u32 = 30;

/// Hours before a booking after which it can no longer be moved
pub const RESCHEDULE_WINDOW_HOURS: i64 = 4;

/// Number of times a single booking may be rescheduled
pub const MAX_RESCHEDULES: u32 = 3;

/// Minimum gap required between "now" and the start of a same-day slot for
/// that slot to remain bookable.
///
/// Never negative, so a slot whose start is already past is always disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTimeBuffer(Duration);

impl LeadTimeBuffer {
    pub fn from_minutes(minutes: u32) -> Self {
        Self(Duration::minutes(i64::from(minutes)))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn minutes(&self) -> i64 {
        self.0.num_minutes()
    }
}

impl Default for LeadTimeBuffer {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_LEAD_TIME_MINUTES)
    }
}

/// Reschedule limits shown to customers.
///
/// The booking backend is the only place these limits are enforced. This type
/// exists so the storefront can describe them, e.g. "2 of 3 reschedules left".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReschedulePolicy {
    pub window: Duration,
    pub max_reschedules: u32,
}

impl ReschedulePolicy {
    pub fn window_hours(&self) -> i64 {
        self.window.num_hours()
    }

    /// Reschedules left after `used` have been spent, never below zero
    pub fn remaining(&self, used: u32) -> u32 {
        self.max_reschedules.saturating_sub(used)
    }
}

impl Default for ReschedulePolicy {
    fn default() -> Self {
        Self {
            window: Duration::hours(RESCHEDULE_WINDOW_HOURS),
            max_reschedules: MAX_RESCHEDULES,
        }
    }
}
