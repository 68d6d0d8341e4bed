//! Absolute short dates ("Oct 5", "5 de out.") for the date fallback.
//!
//! Kept behind [`ShortDateFormat`] so bucketing never depends on a specific
//! locale-data library.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::locale::Region;

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PT_MONTHS: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.",
    "dez.",
];

/// Renders a month + day string for an instant.
pub trait ShortDateFormat {
    /// `timezone` is an IANA name; `None` means the host's local zone.
    fn format_short_date(
        &self,
        instant_ms: i64,
        region: Region,
        timezone: Option<&str>,
    ) -> Result<String>;
}

/// [`ShortDateFormat`] backed by chrono and the bundled tz database.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoShortDate;

impl ShortDateFormat for ChronoShortDate {
    fn format_short_date(
        &self,
        instant_ms: i64,
        region: Region,
        timezone: Option<&str>,
    ) -> Result<String> {
        let utc = DateTime::<Utc>::from_timestamp_millis(instant_ms)
            .ok_or(Error::InstantOutOfRange(instant_ms))?;

        match timezone {
            Some(name) => {
                // IANA names match regardless of case ("utc", "america/sao_paulo")
                let tz = Tz::from_str_insensitive(name)
                    .map_err(|_| Error::UnknownTimezone(name.to_string()))?;
                Ok(month_day(&utc.with_timezone(&tz), region))
            }
            None => Ok(month_day(&utc.with_timezone(&Local), region)),
        }
    }
}

fn month_day<Z: TimeZone>(dt: &DateTime<Z>, region: Region) -> String {
    let month = dt.month0() as usize;
    let day = dt.day();
    match region {
        Region::EnUs => format!("{} {}", EN_MONTHS[month], day),
        Region::PtBr => format!("{} de {}", day, PT_MONTHS[month]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-10-05T12:00:00Z
    const OCT_5_NOON: i64 = 1_728_129_600_000;

    #[test]
    fn test_en_us_short_date() {
        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::EnUs, Some("UTC"))
            .unwrap();
        assert_eq!(s, "Oct 5");
    }

    #[test]
    fn test_pt_br_short_date() {
        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::PtBr, Some("America/Sao_Paulo"))
            .unwrap();
        assert_eq!(s, "5 de out.");
    }

    #[test]
    fn test_timezone_shifts_the_day() {
        // Noon UTC is already the next day in Auckland (UTC+13 in October)
        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::EnUs, Some("Pacific/Auckland"))
            .unwrap();
        assert_eq!(s, "Oct 6");
    }

    #[test]
    fn test_timezone_names_ignore_case() {
        for name in ["utc", "Utc", "UTC"] {
            let s = ChronoShortDate
                .format_short_date(OCT_5_NOON, Region::EnUs, Some(name))
                .unwrap();
            assert_eq!(s, "Oct 5", "timezone {name}");
        }

        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::PtBr, Some("america/sao_paulo"))
            .unwrap();
        assert_eq!(s, "5 de out.");

        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::EnUs, Some("PACIFIC/AUCKLAND"))
            .unwrap();
        assert_eq!(s, "Oct 6");
    }

    #[test]
    fn test_unknown_timezone_is_an_error() {
        let err = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::EnUs, Some("Mars/Olympus_Mons"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTimezone(ref name) if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_out_of_range_instant_is_an_error() {
        let err = ChronoShortDate
            .format_short_date(i64::MAX, Region::EnUs, Some("UTC"))
            .unwrap_err();
        assert!(matches!(err, Error::InstantOutOfRange(_)));
    }

    #[test]
    fn test_local_zone_renders_something() {
        let s = ChronoShortDate
            .format_short_date(OCT_5_NOON, Region::EnUs, None)
            .unwrap();
        assert!(s.starts_with("Oct "), "got {s}");
    }
}
