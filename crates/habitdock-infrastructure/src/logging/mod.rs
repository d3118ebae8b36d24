//! Logging setup.
//!
//! Every event goes to a daily-rotated JSON file (`habitdock.log`) in the log
//! directory. Debug builds, and any run with `verbose` set, also print a
//! human-readable copy on stderr so stdout stays free for command output.
//!
//! `RUST_LOG` always wins over the configured level.

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_PREFIX: &str = "habitdock.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub log_dir: PathBuf,
    /// Default filter directive, e.g. `info` or `debug`
    pub level: String,
    pub verbose: bool,
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(options: LoggerOptions) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&options.log_dir)?;
    let _ = LOG_DIR.set(options.log_dir.clone());

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&options.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
        ))
        .with_filter(build_filter(&options.level));

    let console_layer = if cfg!(debug_assertions) || options.verbose {
        let level = if options.verbose { "debug" } else { options.level.as_str() };
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_filter(build_filter(level)),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(console_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "habitdock::logging",
        log_dir = %options.log_dir.display(),
        level = %options.level,
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

/// Console-only subscriber used when the log directory cannot be set up
pub fn init_console_logger(level: &str) {
    if LOGGER_READY.get().is_some() {
        return;
    }

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(level))
        .with_target(false)
        .try_init();

    if result.is_ok() {
        let _ = LOGGER_READY.set(());
    }
}

/// Directory the file layer writes to; `None` until `init_logger` succeeds
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Third-party crates stay at `warn` unless the app level is `trace`
fn default_directive(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    let deps = if level == "trace" { "trace" } else { "warn" };
    format!("{deps},habitdock={level},habitdock_domain={level},habitdock_infrastructure={level},habitdock_lib={level}")
}
