//! reltime - CLI tool to format durations and timestamps as relative time
//!
//! Prints short phrases such as "5m ago", "in 2h", "há 3d" or "Oct 5".
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/reltime/config.toml (~/.config/reltime/config.toml)
//! - Logs: $XDG_STATE_HOME/reltime/reltime.log.YYYY-MM-DD (~/.local/state/reltime/)

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand, ValueEnum};
use reltime_core::{
    format_duration_ago, resolve_locale_tag, Clock, Config, FixedClock, SystemClock,
    TimestampFormatter,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "reltime")]
#[command(about = "Format durations and timestamps as short relative time")]
#[command(version)]
struct Args {
    /// Verbose output (writes a log file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Format an elapsed duration given in milliseconds
    Ago {
        /// Elapsed milliseconds
        #[arg(allow_negative_numbers = true)]
        duration_ms: f64,

        /// Print the bare unit ("5m") instead of "5m ago"
        #[arg(long)]
        no_suffix: bool,

        /// Locale for phrasing (e.g. pt-BR); default from config
        #[arg(short, long)]
        locale: Option<String>,

        /// Text printed for invalid input; default from config
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Format a timestamp relative to now
    At {
        /// Epoch milliseconds or an RFC 3339 timestamp
        #[arg(allow_hyphen_values = true)]
        timestamp: String,

        /// Show a short date for timestamps more than 7 days away
        #[arg(long, conflicts_with = "no_date_fallback")]
        date_fallback: bool,

        /// Always use the relative phrase, even if the config enables dates
        #[arg(long)]
        no_date_fallback: bool,

        /// IANA timezone for the short date; default from config
        #[arg(long)]
        timezone: Option<String>,

        /// Locale for phrasing (e.g. pt-BR); default from config
        #[arg(short, long)]
        locale: Option<String>,

        /// Text printed for invalid input; default from config
        #[arg(long)]
        fallback: Option<String>,

        /// Reference instant in epoch milliseconds (default: current time)
        #[arg(long, allow_negative_numbers = true)]
        now: Option<f64>,
    },

    /// Show configuration paths and formatting defaults
    Config,
}

#[derive(Serialize)]
struct Rendered<'a> {
    kind: &'a str,
    input: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct ConfigReport {
    config_file: String,
    config_file_exists: bool,
    log_file: String,
    locale: String,
    timezone: Option<String>,
    date_fallback: bool,
    duration_fallback: String,
    timestamp_fallback: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging if verbose
    let _log_guard = if args.verbose {
        Some(reltime_core::logging::init(&config.logging).context("failed to initialize logging")?)
    } else {
        None
    };

    match args.command {
        Command::Ago {
            duration_ms,
            no_suffix,
            locale,
            fallback,
        } => {
            let mut opts = config.format.duration_options();
            opts.suffix = !no_suffix;
            if locale.is_some() {
                opts.locale = locale;
            }
            if let Some(fallback) = fallback {
                opts.fallback = fallback;
            }

            let output = format_duration_ago(Some(duration_ms), &opts);
            tracing::debug!(duration_ms, output = %output, "Formatted duration");
            emit(args.format, "duration", &duration_ms.to_string(), &output)
        }
        Command::At {
            timestamp,
            date_fallback,
            no_date_fallback,
            timezone,
            locale,
            fallback,
            now,
        } => {
            let timestamp_ms = parse_timestamp(&timestamp)?;

            let mut opts = config.format.timestamp_options();
            if date_fallback {
                opts.date_fallback = true;
            } else if no_date_fallback {
                opts.date_fallback = false;
            }
            if timezone.is_some() {
                opts.timezone = timezone;
            }
            if locale.is_some() {
                opts.locale = locale;
            }
            if let Some(fallback) = fallback {
                opts.fallback = fallback;
            }

            let output = match now {
                Some(now) => format_at(FixedClock(now), timestamp_ms, &opts),
                None => format_at(SystemClock, timestamp_ms, &opts),
            };
            tracing::debug!(timestamp_ms, output = %output, "Formatted timestamp");
            emit(args.format, "timestamp", &timestamp, &output)
        }
        Command::Config => cmd_config(&config, args.format),
    }
}

fn format_at<C: Clock>(
    clock: C,
    timestamp_ms: f64,
    opts: &reltime_core::TimestampOptions,
) -> String {
    TimestampFormatter::with_clock(clock).format(Some(timestamp_ms), opts)
}

/// Accepts epoch milliseconds or RFC 3339.
fn parse_timestamp(raw: &str) -> Result<f64> {
    if let Ok(ms) = raw.trim().parse::<f64>() {
        return Ok(ms);
    }
    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("invalid timestamp {raw:?}: expected epoch ms or RFC 3339"))?;
    Ok(parsed.timestamp_millis() as f64)
}

fn emit(format: OutputFormat, kind: &str, input: &str, output: &str) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", output),
        OutputFormat::Json => {
            let rendered = Rendered {
                kind,
                input,
                output,
            };
            println!("{}", serde_json::to_string(&rendered)?);
        }
    }
    Ok(())
}

fn cmd_config(config: &Config, format: OutputFormat) -> Result<()> {
    let config_path = Config::config_path();
    let report = ConfigReport {
        config_file: config_path.display().to_string(),
        config_file_exists: config_path.exists(),
        log_file: reltime_core::logging::current_log_file()
            .display()
            .to_string(),
        locale: resolve_locale_tag(config.format.locale.as_deref()),
        timezone: config.format.timezone.clone(),
        date_fallback: config.format.date_fallback,
        duration_fallback: config.format.duration_fallback.clone(),
        timestamp_fallback: config.format.timestamp_fallback.clone(),
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("reltime Configuration");
    println!("=====================");
    println!();
    println!(
        "Config file:        {}{}",
        report.config_file,
        if report.config_file_exists {
            ""
        } else {
            " (not found, using defaults)"
        }
    );
    println!("Log file:           {}", report.log_file);
    println!();
    println!("Locale:             {}", report.locale);
    println!(
        "Timezone:           {}",
        report.timezone.as_deref().unwrap_or("local")
    );
    println!("Date fallback:      {}", report.date_fallback);
    println!("Duration fallback:  {}", report.duration_fallback);
    println!("Timestamp fallback: {}", report.timestamp_fallback);

    Ok(())
}
