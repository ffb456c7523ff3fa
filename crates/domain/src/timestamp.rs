use chrono::{DateTime, Duration, Utc};

/// Column format used for every timestamp in the CRM tables (UTC). Rows
/// written by the web application may carry a `.ffffff` microsecond suffix.
pub const STORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format of the `[...]` prefix in cleanup, reminder and restock logs.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format of heartbeat lines.
pub const HEARTBEAT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y-%H:%M:%S";

/// Text form of `at` for comparison against stored columns.
///
/// Whole seconds are written without a fraction. Anything finer is rounded
/// up to the next microsecond and written as `.ffffff`, so for any stored
/// value `s`, `s >= to_store_timestamp(at)` as text holds exactly when the
/// instant of `s` is at or after `at`.
pub fn to_store_timestamp(at: DateTime<Utc>) -> String {
    let sub_micro = at.timestamp_subsec_nanos() % 1_000;
    let at = if sub_micro == 0 {
        at
    } else {
        at.checked_add_signed(Duration::nanoseconds(i64::from(1_000 - sub_micro)))
            .unwrap_or(at)
    };

    if at.timestamp_subsec_nanos() == 0 {
        at.format(STORE_TIMESTAMP_FORMAT).to_string()
    } else {
        at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}
