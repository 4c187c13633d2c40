use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            e => Err(format!("Invalid log level: {e}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Plaintext,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plaintext" => Ok(LogFormat::Plaintext),
            "json" => Ok(LogFormat::Json),
            e => Err(format!("Invalid log format: {e}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Initialize logging.
///
/// Logs are written to stderr, leaving stdout to command output.
///
/// Returns a drop guard responsible for flushing any remaining logs when the program terminates.
/// The guard must be bound to a named variable, `_` drops it immediately.
pub fn init(log_level: LogLevel, log_format: LogFormat) -> Result<WorkerGuard> {
    let log_level = match std::env::var("RUST_LOG") {
        Ok(rust_log) => rust_log,
        Err(_) => log_level.to_string(),
    };

    let filter = build_tracing_filter(&log_level)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let builder = FmtSubscriber::builder()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(enable_ansi())
        .with_thread_ids(false);

    match log_format {
        LogFormat::Plaintext => builder.finish().try_init()?,
        LogFormat::Json => builder.json().finish().try_init()?,
    };

    Ok(guard)
}

/// Colored output only when stderr is a terminal.
pub fn enable_ansi() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Common prefix of the crates targeted by the default log level.
const TARGET_CRATES: &[&str] = &["polybft"];

/// Build a tracing directive setting the log level of the `polybft_*` crates.
pub fn default_directive(log_level: &str) -> String {
    use itertools::Itertools;

    TARGET_CRATES
        .iter()
        .map(|&c| format!("{c}={log_level}"))
        .join(",")
}

/// Builds a tracing filter from a comma-separated list of directives.
///
/// A bare level applies to our own crates only, `target=level` is taken as is.
fn build_tracing_filter(log_levels: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();

    for log_level in log_levels.split(',').filter(|l| !l.is_empty()) {
        let directive = if log_level.contains('=') {
            log_level.to_string()
        } else {
            default_directive(log_level)
        };

        let directive = directive
            .parse()
            .map_err(|e| eyre!("Invalid log level '{log_level}': {e}"))?;

        filter = filter.add_directive(directive);
    }

    Ok(filter)
}
