use std::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex, MutexGuard, OnceLock, PoisonError,
};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
    /// Suppresses every record.
    Off,
}

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static GLOBAL_LOG_HANDLER: OnceLock<Mutex<Box<dyn LogHandler>>> = OnceLock::new();

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Off => "OFF",
        }
    }

    fn from_u8(val: u8) -> LogLevel {
        match val {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

pub fn global_log_level() -> LogLevel {
    LogLevel::from_u8(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_global_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

fn should_log(level: LogLevel) -> bool {
    level != LogLevel::Off && level >= global_log_level()
}

pub trait LogHandler: Send + Sync {
    fn handle(&self, level: LogLevel, msg: &str);
}

/// Writes records to stderr so they never mix with serial output on stdout.
pub struct ConsoleLogger;

impl LogHandler for ConsoleLogger {
    fn handle(&self, _level: LogLevel, msg: &str) {
        eprintln!("{}", msg);
    }
}

fn global_handler() -> MutexGuard<'static, Box<dyn LogHandler>> {
    GLOBAL_LOG_HANDLER
        .get_or_init(|| Mutex::new(Box::new(ConsoleLogger)))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

pub fn set_global_log_handler(handler: Box<dyn LogHandler>) {
    *global_handler() = handler;
}

pub fn format_record(level: LogLevel, name: &str, msg: &str) -> String {
    format!("[{}] [{}] {}", level.as_str(), name, msg)
}

pub fn log(level: LogLevel, name: &str, msg: &str) {
    if !should_log(level) {
        return;
    }
    global_handler().handle(level, &format_record(level, name, msg));
}

#[macro_export]
macro_rules! log_debug {
    ($name:expr, $($arg:tt)*) => {
        $crate::utils::log::log($crate::utils::log::LogLevel::Debug, $name, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($name:expr, $($arg:tt)*) => {
        $crate::utils::log::log($crate::utils::log::LogLevel::Info, $name, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($name:expr, $($arg:tt)*) => {
        $crate::utils::log::log($crate::utils::log::LogLevel::Warn, $name, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($name:expr, $($arg:tt)*) => {
        $crate::utils::log::log($crate::utils::log::LogLevel::Error, $name, &format!($($arg)*))
    };
}
