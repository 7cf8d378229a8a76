//! Logging infrastructure for shaun-editor.
//!
//! A small leveled logger that appends to a single file. The global
//! instance is set up once with [`init`]; messages logged before that are
//! dropped.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Start every session with a fresh file
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== Shaun Text Editor Log Start ===");
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn add_entry(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");

        // Write to file (recreate if deleted)
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger.
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Path to the log file (truncated on start)
/// * `min_level` - Minimum log level to record
pub fn init(file_path: PathBuf, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

fn log(level: LogLevel, message: String) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(logger) = logger.lock() {
            logger.add_entry(level, &message);
        }
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message.into());
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message.into());
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message.into());
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message.into());
}
