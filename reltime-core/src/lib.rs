//! # reltime-core
//!
//! Core library for reltime - short, locale-aware relative time strings.
//!
//! This library provides:
//! - Duration formatting ("5m ago", "2h", "just now")
//! - Timestamp formatting relative to now ("in 5m", "3d ago", "Oct 5")
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Formatting pipeline
//!
//! Both formatters are pure functions of their input (and, for timestamps,
//! the current instant):
//! - **Classify:** round the magnitude into a [`Bucket`] (just now, minutes, hours, days)
//! - **Render:** phrase the bucket for a [`Direction`] and locale ("5m ago", "há 5m", "in 5m")
//! - **Date fallback (optional):** old timestamps become a short calendar date
//!
//! Invalid input never panics or errors; it yields the configured fallback string.
//!
//! ## Example
//!
//! ```rust
//! use reltime_core::{format_duration_ago, format_timestamp_relative_at};
//! use reltime_core::{DurationOptions, TimestampOptions};
//!
//! assert_eq!(format_duration_ago(Some(150_000.0), &DurationOptions::default()), "3m ago");
//!
//! let now = 1_700_000_000_000.0;
//! let opts = TimestampOptions::default();
//! assert_eq!(format_timestamp_relative_at(Some(now + 300_000.0), now, &opts), "in 5m");
//! ```

// Re-export commonly used items at the crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use duration::{format_duration_ago, DurationOptions};
pub use error::{Error, Result};
pub use locale::{resolve_locale_tag, LocaleVariant, Region};
pub use short_date::{ChronoShortDate, ShortDateFormat};
pub use timestamp::{
    format_timestamp_relative, format_timestamp_relative_at, TimestampFormatter, TimestampOptions,
};
pub use types::*;

// Public modules
pub mod clock;
pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod locale;
pub mod logging;
pub mod render;
pub mod short_date;
pub mod timestamp;
pub mod types;
