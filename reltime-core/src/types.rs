//! Core value types for relative time formatting
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Bucket** | The display granularity (just now, minutes, hours, days) chosen for a magnitude |
//! | **Direction** | Whether the described instant lies in the past or the future |
//! | **Date fallback** | Showing a calendar date instead of a relative phrase for old instants |
//!
//! Every value here is built per call and thrown away; nothing is cached.

const MS_PER_SECOND: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Hours are shown up to (not including) this many before switching to days.
pub const HOURS_BUCKET_LIMIT: u64 = 48;

/// Round a non-negative magnitude to the nearest integer, ties upward.
///
/// Stays in `f64` so arbitrarily large magnitudes keep their size in the
/// unbounded day bucket.
fn round_count(value: f64) -> f64 {
    // f64::round ties away from zero, which is "up" for the non-negative
    // magnitudes we deal with.
    value.round()
}

// ============================================
// Direction
// ============================================

/// Position of an instant relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    /// Direction for `now - instant`. Zero counts as past.
    pub fn from_diff(diff_ms: f64) -> Self {
        if diff_ms >= 0.0 {
            Direction::Past
        } else {
            Direction::Future
        }
    }
}

// ============================================
// Bucket
// ============================================

/// A magnitude classified into its display unit.
///
/// Every value is a non-negative whole number. Days are kept as `f64` since
/// the day bucket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bucket {
    /// Under a minute. Carries the rounded seconds for the bare `"{n}s"` form.
    JustNow { seconds: u64 },
    Minutes(u64),
    Hours(u64),
    Days(f64),
}

impl Bucket {
    /// Classify a known elapsed duration.
    ///
    /// Seconds are rounded first and minutes derived from the rounded seconds,
    /// so 29.5s and up already count as one minute.
    pub fn from_elapsed_ms(duration_ms: f64) -> Self {
        let seconds = round_count(duration_ms / MS_PER_SECOND);
        let minutes = round_count(seconds / SECONDS_PER_MINUTE);
        if minutes < 1.0 {
            return Bucket::JustNow {
                seconds: seconds as u64,
            };
        }
        Self::from_minutes(minutes)
    }

    /// Classify the absolute distance between an instant and now.
    ///
    /// Unlike [`Bucket::from_elapsed_ms`], anything under 60 rounded seconds
    /// is "just now".
    pub fn from_offset_ms(abs_diff_ms: f64) -> Self {
        let seconds = round_count(abs_diff_ms / MS_PER_SECOND);
        if seconds < 60.0 {
            return Bucket::JustNow {
                seconds: seconds as u64,
            };
        }
        Self::from_minutes(round_count(seconds / SECONDS_PER_MINUTE))
    }

    fn from_minutes(minutes: f64) -> Self {
        if minutes < MINUTES_PER_HOUR {
            return Bucket::Minutes(minutes as u64);
        }
        let hours = round_count(minutes / MINUTES_PER_HOUR);
        if hours < HOURS_BUCKET_LIMIT as f64 {
            return Bucket::Hours(hours as u64);
        }
        Bucket::Days(round_count(hours / HOURS_PER_DAY))
    }

    /// Ordering of buckets by granularity; never decreases as magnitude grows.
    pub fn rank(&self) -> u8 {
        match self {
            Bucket::JustNow { .. } => 0,
            Bucket::Minutes(_) => 1,
            Bucket::Hours(_) => 2,
            Bucket::Days(_) => 3,
        }
    }

    /// Unit symbol appended to the value.
    pub fn unit(&self) -> &'static str {
        match self {
            Bucket::JustNow { .. } => "s",
            Bucket::Minutes(_) => "m",
            Bucket::Hours(_) => "h",
            Bucket::Days(_) => "d",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Bucket::JustNow { seconds } => seconds as f64,
            Bucket::Minutes(v) | Bucket::Hours(v) => v as f64,
            Bucket::Days(v) => v,
        }
    }

    /// Bare form without any direction phrasing, e.g. `"5m"` or `"0s"`.
    pub fn bare(&self) -> String {
        format!("{}{}", self.value(), self.unit())
    }
}
