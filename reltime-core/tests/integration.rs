//! Integration tests for reltime formatting
//!
//! These tests drive the public API the way status views do: raw epoch
//! millisecond fields from a snapshot, a frozen "now", and optional locale
//! and date fallback settings.

use reltime_core::config::FormatConfig;
use reltime_core::{
    format_duration_ago, format_timestamp_relative_at, Bucket, DurationOptions, FixedClock,
    TimestampFormatter, TimestampOptions,
};

/// 2024-10-05T12:00:00Z
const NOW: f64 = 1_728_129_600_000.0;
const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Fields a channel status card shows
struct ChannelSnapshot {
    last_start_at: Option<f64>,
    last_check_at: Option<f64>,
    auth_age_ms: Option<f64>,
}

fn render_card(snapshot: &ChannelSnapshot, format: &FormatConfig) -> [String; 3] {
    let formatter = TimestampFormatter::with_clock(FixedClock(NOW));
    let ts_opts = format.timestamp_options();
    [
        formatter.format(snapshot.last_start_at, &ts_opts),
        formatter.format(snapshot.last_check_at, &ts_opts),
        format_duration_ago(snapshot.auth_age_ms, &format.duration_options()),
    ]
}

// ============================================
// Duration formatting
// ============================================

#[test]
fn test_duration_invalid_inputs_use_fallback() {
    let opts = DurationOptions::default();
    for input in [None, Some(-1.0), Some(-0.5), Some(f64::NAN), Some(f64::INFINITY)] {
        assert_eq!(format_duration_ago(input, &opts), "unknown", "input {input:?}");
    }
}

#[test]
fn test_duration_sub_minute() {
    let suffixed = DurationOptions::default();
    let bare = DurationOptions::bare();

    let mut ms = 0.0;
    while ms < 29_500.0 {
        assert_eq!(format_duration_ago(Some(ms), &suffixed), "just now");
        let expected = format!("{}s", (ms / 1000.0).round() as u64);
        assert_eq!(format_duration_ago(Some(ms), &bare), expected);
        ms += 250.0;
    }
}

#[test]
fn test_duration_documented_examples() {
    let opts = DurationOptions::default();
    assert_eq!(format_duration_ago(Some(150_000.0), &opts), "3m ago");

    let pt = DurationOptions::default().with_locale("pt-BR");
    assert_eq!(format_duration_ago(Some(7_200_000.0), &pt), "há 2h");
}

// ============================================
// Timestamp formatting
// ============================================

#[test]
fn test_timestamp_documented_examples() {
    let opts = TimestampOptions::default();
    let at = |ts: f64| format_timestamp_relative_at(Some(ts), NOW, &opts);

    assert_eq!(at(NOW), "just now");
    assert_eq!(at(NOW + 5.0 * MINUTE), "in 5m");
    assert_eq!(at(NOW - 47.0 * HOUR), "47h ago");
    assert_eq!(at(NOW - 50.0 * HOUR), "2d ago");
}

#[test]
fn test_timestamp_date_fallback() {
    let opts = TimestampOptions::default().with_date_fallback(Some("UTC"));
    let at = |ts: f64| format_timestamp_relative_at(Some(ts), NOW, &opts);

    assert_eq!(at(NOW - 5.0 * DAY), "5d ago");
    assert_eq!(at(NOW - 10.0 * DAY), "Sep 25");
    // Future instants use the date too
    assert_eq!(at(NOW + 30.0 * DAY), "Nov 4");
}

#[test]
fn test_timestamp_date_fallback_accepts_lowercase_timezones() {
    for tz in ["utc", "america/sao_paulo"] {
        let opts = TimestampOptions::default().with_date_fallback(Some(tz));
        assert_eq!(
            format_timestamp_relative_at(Some(NOW - 10.0 * DAY), NOW, &opts),
            "Sep 25",
            "timezone {tz}"
        );
    }
}

#[test]
fn test_timestamp_unsupported_timezone_degrades() {
    reltime_core::logging::init_test();

    let opts = TimestampOptions::default().with_date_fallback(Some("Atlantis/Capital"));
    assert_eq!(
        format_timestamp_relative_at(Some(NOW - 10.0 * DAY), NOW, &opts),
        "10d ago"
    );
}

#[test]
fn test_timestamp_is_idempotent_under_frozen_clock() {
    let opts = TimestampOptions::default().with_locale("pt");
    for offset in [-3.0 * DAY, -2.0 * HOUR, -MINUTE, 0.0, 45.0 * SECOND, 9.0 * DAY] {
        let first = format_timestamp_relative_at(Some(NOW + offset), NOW, &opts);
        let second = format_timestamp_relative_at(Some(NOW + offset), NOW, &opts);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

// ============================================
// Classification
// ============================================

#[test]
fn test_bucket_rank_is_monotonic_for_offsets() {
    let mut last_rank = 0;
    let mut ms = 0.0;
    while ms < 60.0 * DAY {
        let rank = Bucket::from_offset_ms(ms).rank();
        assert!(rank >= last_rank, "rank dropped at {ms}ms");
        last_rank = rank;
        ms += 13.0 * SECOND;
    }
}

// ============================================
// Status card rendering
// ============================================

#[test]
fn test_status_card_with_defaults() {
    let snapshot = ChannelSnapshot {
        last_start_at: Some(NOW - 3.0 * HOUR),
        last_check_at: None,
        auth_age_ms: Some(12.0 * DAY),
    };

    let card = render_card(&snapshot, &FormatConfig::default());
    assert_eq!(card, ["3h ago", "n/a", "12d ago"]);
}

#[test]
fn test_status_card_with_portuguese_config() {
    let snapshot = ChannelSnapshot {
        last_start_at: Some(NOW - 20.0 * DAY),
        last_check_at: Some(NOW - 10.0 * SECOND),
        auth_age_ms: None,
    };
    let format = FormatConfig {
        locale: Some("pt-BR".to_string()),
        timezone: Some("America/Sao_Paulo".to_string()),
        date_fallback: true,
        ..Default::default()
    };

    let card = render_card(&snapshot, &format);
    assert_eq!(card, ["15 de set.", "agora mesmo", "unknown"]);
}
