//! Log side channel.
//!
//! Misuse detected by the engine never panics; it is reported here instead.
//! Hosts can install a callback to route messages into their own UI, and
//! every message is also emitted as a `tracing` event.

use std::sync::{Mutex, OnceLock};

/// Log level for the host callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log message to `tracing` and to the registered callback.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: "textgrid", "{message}"),
        LogLevel::Info => tracing::info!(target: "textgrid", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "textgrid", "{message}"),
        LogLevel::Error => tracing::error!(target: "textgrid", "{message}"),
    }

    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
