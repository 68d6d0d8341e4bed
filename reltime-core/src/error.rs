//! Error types for reltime-core
//!
//! The formatting entry points never return these: they degrade to a fallback
//! string instead. Errors only surface from the fallible edges (config loading,
//! logging setup, and the short-date capability).

use thiserror::Error;

/// Main error type for the reltime-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("logging error: {0}")]
    Logging(String),

    /// Timezone identifier not known to the tz database
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Epoch milliseconds outside the representable calendar range
    #[error("instant out of range: {0}ms")]
    InstantOutOfRange(i64),
}

/// Result type alias for reltime-core
pub type Result<T> = std::result::Result<T, Error>;
