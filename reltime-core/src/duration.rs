//! Formatting of already-measured elapsed durations.
//!
//! With suffix (default): `"just now"`, `"5m ago"`, `"3h ago"`, `"2d ago"`.
//! Without suffix: `"0s"`, `"5m"`, `"3h"`, `"2d"`.
//!
//! Note the sub-minute asymmetry: with the suffix a short duration reads
//! "just now", but the bare form reports rounded seconds (`"12s"`).

use serde::Deserialize;

use crate::render::render_phrase;
use crate::types::{Bucket, Direction};

/// Fallback for missing, non-finite or negative durations.
pub const DEFAULT_DURATION_FALLBACK: &str = "unknown";

/// Options for [`format_duration_ago`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DurationOptions {
    /// Append the "ago" phrasing. When false, returns the bare unit.
    pub suffix: bool,
    /// Returned for invalid input.
    pub fallback: String,
    /// Locale identifier, e.g. `pt-BR`.
    pub locale: Option<String>,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            suffix: true,
            fallback: DEFAULT_DURATION_FALLBACK.to_string(),
            locale: None,
        }
    }
}

impl DurationOptions {
    pub fn bare() -> Self {
        Self {
            suffix: false,
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Format how long ago something happened, given the elapsed milliseconds.
///
/// Never fails: `None`, NaN, infinities and negative values all return
/// `options.fallback`.
pub fn format_duration_ago(duration_ms: Option<f64>, options: &DurationOptions) -> String {
    let duration_ms = match duration_ms {
        Some(ms) if ms.is_finite() && ms >= 0.0 => ms,
        _ => return options.fallback.clone(),
    };

    let bucket = Bucket::from_elapsed_ms(duration_ms);
    if !options.suffix {
        return bucket.bare();
    }
    render_phrase(bucket, Direction::Past, options.locale.as_deref())
}
