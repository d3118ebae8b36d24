use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use habitdock_domain::streak::DEFAULT_COMPLETION_WINDOW_DAYS;

pub const ENV_DATABASE_PATH: &str = "HABITDOCK_DB";
pub const ENV_LOG_DIR: &str = "HABITDOCK_LOG_DIR";
const APP_DIR_NAME: &str = "habitdock";
const CONFIG_FILE_NAME: &str = "config.json";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(anyhow::anyhow!("Unknown log level: {}", other)),
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: LogLevel,
    pub completion_window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            log_dir: None,
            log_level: LogLevel::Info,
            completion_window_days: DEFAULT_COMPLETION_WINDOW_DAYS,
        }
    }
}

/// Application configuration service
///
/// Reads `config.json` once at startup. A missing or malformed file falls
/// back to defaults; only `set_log_level` writes it back. Loading happens
/// before the logger exists, so problems are kept and reported by
/// `log_load_outcome` once it does.
pub struct ConfigService {
    config: AppConfig,
    log_level: Arc<AtomicU8>,
    config_path: PathBuf,
    load_warning: Option<String>,
}

impl ConfigService {
    /// Load from `explicit_path`, or from the platform config directory
    pub fn load(explicit_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match explicit_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        Ok(Self::load_from(config_path))
    }

    pub fn load_from(config_path: PathBuf) -> Self {
        let (config, load_warning) = read_config(&config_path);

        Self {
            log_level: Arc::new(AtomicU8::new(config.log_level as u8)),
            config,
            config_path,
            load_warning,
        }
    }

    /// Why the file was ignored in favour of defaults, if it was
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Emit the load diagnostics; call once a subscriber is installed
    pub fn log_load_outcome(&self) {
        if let Some(reason) = &self.load_warning {
            warn!(
                config_path = %self.config_path.display(),
                reason = %reason,
                "Config ignored, using defaults"
            );
        }

        info!(
            config_path = %self.config_path.display(),
            log_level = self.get_log_level().as_str(),
            completion_window_days = self.config.completion_window_days,
            "Config loaded"
        );
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `HABITDOCK_DB`, then the configured path, then the platform data dir
    pub fn database_path(&self) -> PathBuf {
        resolve_path(
            std::env::var(ENV_DATABASE_PATH).ok(),
            self.config.database_path.as_deref(),
            || data_dir().join("habitdock.db"),
        )
    }

    /// `HABITDOCK_LOG_DIR`, then the configured dir, then the platform data dir
    pub fn log_dir(&self) -> PathBuf {
        resolve_path(
            std::env::var(ENV_LOG_DIR).ok(),
            self.config.log_dir.as_deref(),
            || data_dir().join("logs"),
        )
    }

    pub fn completion_window_days(&self) -> u32 {
        self.config.completion_window_days
    }

    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Set log level and persist to disk; applies from the next start
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        self.log_level.store(level as u8, Ordering::Relaxed);

        let config = AppConfig {
            log_level: level,
            ..self.config.clone()
        };

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&config)?;
        std::fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;

        info!(
            config_path = %self.config_path.display(),
            log_level = level.as_str(),
            "Log level saved"
        );

        Ok(())
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get config dir"))?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn read_config(path: &Path) -> (AppConfig, Option<String>) {
    if !path.exists() {
        return (AppConfig::default(), None);
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(format!("Invalid config: {}", e))),
        },
        Err(e) => (AppConfig::default(), Some(format!("Unreadable config: {}", e))),
    }
}

fn resolve_path(
    env_value: Option<String>,
    configured: Option<&Path>,
    fallback: impl FnOnce() -> PathBuf,
) -> PathBuf {
    env_value
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(fallback)
}
