//! Log output for the `tip-time` binary.
//!
//! The subscriber is built once at startup from [`LogSettings`], after the
//! command line and config file are known. Records go to stderr (unless
//! quiet) and, when a log file is configured, are appended to it as well.

use std::{
    fmt,
    fs::File,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Filter used when neither a level nor `RUST_LOG` is given. Results go to
/// stdout, so the log on stderr stays quiet unless asked.
const DEFAULT_FILTER: &str = "warn";

/// Where and how much to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive (e.g. `debug`, `tip_ui=trace`). Takes precedence
    /// over `RUST_LOG`.
    pub level: Option<String>,
    /// File that records are appended to.
    pub file: Option<PathBuf>,
    /// Suppresses the stderr output; the log file is unaffected.
    pub quiet: bool,
}

/// Local wall-clock time of day, e.g. `14:03:27.512`.
struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Chooses the filter: an explicit `level` wins, then the `RUST_LOG`
/// value in `env`, then [`DEFAULT_FILTER`].
///
/// An invalid `level` is an error. An invalid `RUST_LOG` is ignored.
pub fn build_filter(
    level: Option<&str>,
    env: Option<&str>,
) -> Result<EnvFilter> {
    if let Some(level) = level {
        return EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{level}'"));
    }
    Ok(env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER)))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn build_subscriber(
    settings: &LogSettings,
    filter: EnvFilter,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let stderr = (!settings.quiet).then(|| {
        tracing_subscriber::fmt::layer()
            .with_timer(LocalClock)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    let file = match &settings.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalClock)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file))
}

/// Installs the global subscriber. Call once, at startup.
///
/// # Errors
///
/// Fails if the level is not a valid filter directive, the log file
/// cannot be opened, or a subscriber is already installed.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(settings.level.as_deref(), env.as_deref())?;
    build_subscriber(settings, filter)?
        .try_init()
        .context("Failed to install the log subscriber")
}
