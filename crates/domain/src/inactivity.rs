use crate::customer::CustomerActivity;
use crate::errors::DomainError;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_INACTIVITY_WINDOW_DAYS: u32 = 365;

/// Upper bound for any day-count window (about 100 years).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Fixed-length inactivity window measured in whole days of 24 hours.
///
/// The window is a duration, not a calendar offset: 365 days before
/// 2024-12-31 is 2024-01-01, not 2023-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityWindow {
    days: u32,
}

impl InactivityWindow {
    pub fn new(days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::InvalidConfig(
                "inactivity window must be at least 1 day".to_string(),
            ));
        }
        if days > MAX_WINDOW_DAYS {
            return Err(DomainError::InvalidConfig(format!(
                "inactivity window of {days} days exceeds the maximum of {MAX_WINDOW_DAYS}"
            )));
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// `now - days`. Orders created at or after this instant count as recent.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        days_before(now, self.days)
    }
}

impl Default for InactivityWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_INACTIVITY_WINDOW_DAYS,
        }
    }
}

/// `now - days` as a fixed duration, or `InvalidConfig` when the result
/// falls outside the representable range.
pub fn days_before(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, DomainError> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            DomainError::InvalidConfig(format!("{days} days before {now} is out of range"))
        })
}

/// A customer is inactive when it never ordered, or when its newest order
/// is strictly older than `cutoff`.
pub fn is_inactive(activity: &CustomerActivity, cutoff: DateTime<Utc>) -> bool {
    match activity.last_order_at {
        None => true,
        Some(last_order_at) => last_order_at < cutoff,
    }
}
