#![allow(dead_code)]

mod db;

pub use db::*;

use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}
