//! Formatting of absolute instants relative to now.
//!
//! Handles both past (`"5m ago"`) and future (`"in 5m"`) instants, and can
//! optionally switch to a short calendar date for instants more than a week
//! away.

use serde::Deserialize;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::locale::LocaleVariant;
use crate::render::{render_bucket, render_phrase};
use crate::short_date::{ChronoShortDate, ShortDateFormat};
use crate::types::{Bucket, Direction};

/// Fallback for missing or non-finite timestamps.
pub const DEFAULT_TIMESTAMP_FALLBACK: &str = "n/a";

/// Day count above which the date fallback kicks in.
pub const DATE_FALLBACK_AFTER_DAYS: u64 = 7;

/// Options for [`format_timestamp_relative`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimestampOptions {
    /// Show a short date (e.g. "Oct 5") for instants more than 7 days away.
    pub date_fallback: bool,
    /// IANA timezone for the date fallback. Host local zone when unset.
    pub timezone: Option<String>,
    /// Returned for invalid input.
    pub fallback: String,
    /// Locale identifier, e.g. `pt-BR`.
    pub locale: Option<String>,
}

impl Default for TimestampOptions {
    fn default() -> Self {
        Self {
            date_fallback: false,
            timezone: None,
            fallback: DEFAULT_TIMESTAMP_FALLBACK.to_string(),
            locale: None,
        }
    }
}

impl TimestampOptions {
    pub fn with_date_fallback(mut self, timezone: Option<&str>) -> Self {
        self.date_fallback = true;
        self.timezone = timezone.map(str::to_string);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Relative timestamp formatter with an injected clock and date renderer.
#[derive(Debug, Clone, Default)]
pub struct TimestampFormatter<C = SystemClock, D = ChronoShortDate> {
    clock: C,
    dates: D,
}

impl TimestampFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TimestampFormatter<C, ChronoShortDate> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            dates: ChronoShortDate,
        }
    }
}

impl<C: Clock, D: ShortDateFormat> TimestampFormatter<C, D> {
    pub fn with_parts(clock: C, dates: D) -> Self {
        Self { clock, dates }
    }

    /// Format `timestamp_ms` (epoch milliseconds) relative to the clock's now.
    ///
    /// Never fails: invalid input yields `options.fallback`, and a failed date
    /// rendering degrades to the day phrase.
    pub fn format(&self, timestamp_ms: Option<f64>, options: &TimestampOptions) -> String {
        let timestamp_ms = match timestamp_ms {
            Some(ms) if ms.is_finite() => ms,
            _ => return options.fallback.clone(),
        };

        let diff = self.clock.now_ms() - timestamp_ms;
        let direction = Direction::from_diff(diff);
        let locale = options.locale.as_deref();

        let days = match Bucket::from_offset_ms(diff.abs()) {
            Bucket::Days(days) => days,
            bucket => return render_phrase(bucket, direction, locale),
        };

        if !options.date_fallback || days <= DATE_FALLBACK_AFTER_DAYS as f64 {
            return render_bucket(days, "d", direction, locale);
        }

        let region = LocaleVariant::resolve(locale).region();
        match self.dates.format_short_date(
            timestamp_ms as i64,
            region,
            options.timezone.as_deref(),
        ) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    region = region.as_str(),
                    timezone = ?options.timezone,
                    "Short date unavailable, using day phrase"
                );
                render_bucket(days, "d", direction, locale)
            }
        }
    }
}

/// Format an epoch-millisecond timestamp relative to the system clock.
pub fn format_timestamp_relative(timestamp_ms: Option<f64>, options: &TimestampOptions) -> String {
    TimestampFormatter::new().format(timestamp_ms, options)
}

/// Format an epoch-millisecond timestamp relative to an explicit `now_ms`.
pub fn format_timestamp_relative_at(
    timestamp_ms: Option<f64>,
    now_ms: f64,
    options: &TimestampOptions,
) -> String {
    TimestampFormatter::with_clock(FixedClock(now_ms)).format(timestamp_ms, options)
}
