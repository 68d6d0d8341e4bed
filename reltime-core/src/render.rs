//! Phrase rendering for classified buckets.
//!
//! Value and unit are concatenated verbatim (`"5m ago"`, `"há 2h"`); there is
//! no pluralization.

use std::fmt::Display;

use crate::locale::LocaleVariant;
use crate::types::{Bucket, Direction};

/// Render `value` + `unit` as a directional phrase.
///
/// `value` is expected to be a non-negative whole number.
pub fn render_bucket(
    value: impl Display,
    unit: &str,
    direction: Direction,
    locale: Option<&str>,
) -> String {
    match (LocaleVariant::resolve(locale), direction) {
        (LocaleVariant::Portuguese, Direction::Past) => format!("há {value}{unit}"),
        (LocaleVariant::Portuguese, Direction::Future) => format!("em {value}{unit}"),
        (LocaleVariant::Default, Direction::Past) => format!("{value}{unit} ago"),
        (LocaleVariant::Default, Direction::Future) => format!("in {value}{unit}"),
    }
}

/// Render the sub-minute case.
pub fn render_just_now(direction: Direction, locale: Option<&str>) -> String {
    let phrase = match (LocaleVariant::resolve(locale), direction) {
        (LocaleVariant::Portuguese, Direction::Past) => "agora mesmo",
        (LocaleVariant::Portuguese, Direction::Future) => "em <1m",
        (LocaleVariant::Default, Direction::Past) => "just now",
        (LocaleVariant::Default, Direction::Future) => "in <1m",
    };
    phrase.to_string()
}

/// Render a bucket with direction phrasing.
pub(crate) fn render_phrase(bucket: Bucket, direction: Direction, locale: Option<&str>) -> String {
    match bucket {
        Bucket::JustNow { .. } => render_just_now(direction, locale),
        _ => render_bucket(bucket.value(), bucket.unit(), direction, locale),
    }
}
