//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: Conversion failures
//! - `warn`: Ignored input (extra CSV rows), cleanup failures
//! - `info`: Loaded claim, produced artifacts
//! - `debug`: Per-step details, party fields (redacted unless `--log-data`)
//!
//! # Usage
//!
//! ```ignore
//! use eda_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::from_cli(&cli);
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use clap::ColorChoice;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when personal data logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if personal data logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the input value when personal data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    pub timestamps: bool,
    pub ansi: bool,
    pub format: LogFormat,
    /// Log file path; stderr when `None`.
    pub log_file: Option<PathBuf>,
    /// Whether party names and addresses may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl LogConfig {
    /// Resolve logging settings from the global CLI flags.
    ///
    /// `--log-level` takes precedence over `-v`/`-q`. `RUST_LOG` is honored
    /// only when neither is given.
    pub fn from_cli(cli: &Cli) -> Self {
        let level_filter = cli
            .log_level
            .map(LevelFilter::from)
            .unwrap_or_else(|| cli.verbosity.tracing_level_filter());
        let ansi = match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        };
        Self {
            level_filter,
            use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
            timestamps: cli.log_timestamps,
            ansi,
            format: cli.log_format.into(),
            log_file: cli.log_file.clone(),
            log_data: cli.log_data,
        }
    }

    /// Module paths are shown once the workspace crates log at debug or finer.
    fn show_target(&self) -> bool {
        self.level_filter >= LevelFilter::DEBUG
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let filter = build_env_filter(config.level_filter, config.use_env_filter);

    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.show_target());
    let layer = match config.format {
        LogFormat::Json => base.json().with_span_events(FmtSpan::CLOSE).boxed(),
        LogFormat::Compact if config.timestamps => base.compact().with_ansi(config.ansi).boxed(),
        LogFormat::Compact => base
            .compact()
            .with_ansi(config.ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty if config.timestamps => base.with_ansi(config.ansi).boxed(),
        LogFormat::Pretty => base.with_ansi(config.ansi).without_time().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

fn build_env_filter(level_filter: LevelFilter, use_env: bool) -> EnvFilter {
    let default_filter = || EnvFilter::new(default_directives(level_filter));
    if use_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter())
    } else {
        default_filter()
    }
}

/// Workspace crates at the requested level, dependencies at warn at most.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let base = if level_filter > LevelFilter::WARN {
        "warn"
    } else {
        level.as_str()
    };
    format!(
        "{base},eda={level},eda_cli={level},eda_block={level},eda_ingest={level},\
         eda_model={level},eda_output={level},eda_xml={level}"
    )
}
