//! Formatting helpers for callers holding typed times.
//!
//! Status views usually carry `DateTime<Utc>` fields ("last check", "last
//! start") or a measured `std::time::Duration`; these wrap the millisecond
//! based formatters with default options.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::duration::{format_duration_ago, DurationOptions};
use crate::timestamp::{format_timestamp_relative, TimestampOptions};

/// Format a timestamp as relative time (e.g., "2m ago", "in 3h").
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    format_relative_time_with(Some(ts), &TimestampOptions::default())
}

/// Format an optional timestamp as relative time, or "n/a" if missing.
pub fn format_relative_time_opt(ts: Option<DateTime<Utc>>) -> String {
    format_relative_time_with(ts, &TimestampOptions::default())
}

pub fn format_relative_time_with(ts: Option<DateTime<Utc>>, options: &TimestampOptions) -> String {
    format_timestamp_relative(ts.map(|ts| ts.timestamp_millis() as f64), options)
}

/// Format an elapsed duration (e.g., "5m ago", or "5m" with `suffix = false`).
pub fn format_elapsed(elapsed: Duration, options: &DurationOptions) -> String {
    format_duration_ago(Some(elapsed.as_millis() as f64), options)
}
