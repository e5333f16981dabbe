//! Small feature-gated logger shared by the EduGate library and CLI.
//!
//! Levels are compiled in through features and filtered again at runtime:
//! - `log-info` compiles `info!` output (on by default).
//! - `log-debug` compiles `debug!` output plus a runtime on/off switch.
//! - `verbose` compiles `verbose!`, an untagged progress printer.
//! - `file-logging` adds an append-mode file sink; once a file sink is
//!   active, tagged messages go to the file instead of the console.
//! - `error!` and `warn!` are always compiled.
//!
//! On `wasm32` tagged output is routed to `web_sys::console`; on native
//! targets errors and warnings go to stderr, everything else to stdout.

use std::fmt::Arguments;
#[cfg(feature = "log-debug")]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::LazyLock;

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

/// Log severity, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures that abort or corrupt an operation (always compiled).
    Error = 1,
    /// Recoverable problems and fallback paths (always compiled).
    Warn = 2,
    /// Routine progress messages (requires the `log-info` feature).
    Info = 3,
    /// Diagnostic detail (requires `log-debug` and the runtime switch).
    Debug = 4,
}

impl Level {
    /// Parse a level name, case-insensitively. Accepts the same spellings
    /// the config file and CLI use (`error`/`err`, `warn`/`warning`,
    /// `info`, `debug`).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// The bracketed tag written in front of every message at this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Whether messages at this level should go to stderr on native targets.
    const fn use_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }
}

/// Pick the startup level from the compiled feature set.
const fn compiled_default() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

/// Current runtime level, stored as the `Level` discriminant.
static CURRENT_LEVEL: LazyLock<AtomicU8> = LazyLock::new(|| AtomicU8::new(compiled_default()));
/// Runtime switch for `debug!` emission.
#[cfg(feature = "log-debug")]
static DEBUG_SWITCH: AtomicBool = AtomicBool::new(true);
/// Runtime switch for `verbose!` emission.
#[cfg(feature = "verbose")]
static VERBOSE_SWITCH: AtomicBool = AtomicBool::new(false);
/// Open log file handle, if file logging has been initialized.
#[cfg(feature = "file-logging")]
static LOG_SINK: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the runtime log level.
pub fn set_level(level: Level) {
    CURRENT_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Turn on `debug!` emission (no-op without the `log-debug` feature).
#[cfg(feature = "log-debug")]
pub fn enable_debug() {
    DEBUG_SWITCH.store(true, Ordering::SeqCst);
}
/// Turn on `debug!` emission (no-op without the `log-debug` feature).
#[cfg(not(feature = "log-debug"))]
pub fn enable_debug() {}

/// Turn off `debug!` emission (no-op without the `log-debug` feature).
#[cfg(feature = "log-debug")]
pub fn disable_debug() {
    DEBUG_SWITCH.store(false, Ordering::SeqCst);
}
/// Turn off `debug!` emission (no-op without the `log-debug` feature).
#[cfg(not(feature = "log-debug"))]
pub fn disable_debug() {}

/// Whether `debug!` messages currently emit.
#[cfg(feature = "log-debug")]
pub fn is_debug_enabled() -> bool {
    DEBUG_SWITCH.load(Ordering::SeqCst)
}
/// Whether `debug!` messages currently emit (always false without `log-debug`).
#[cfg(not(feature = "log-debug"))]
pub fn is_debug_enabled() -> bool {
    false
}

/// Turn on `verbose!` output (no-op without the `verbose` feature).
#[cfg(feature = "verbose")]
pub fn enable_verbose() {
    VERBOSE_SWITCH.store(true, Ordering::SeqCst);
}
/// Turn on `verbose!` output (no-op without the `verbose` feature).
#[cfg(not(feature = "verbose"))]
pub fn enable_verbose() {}

/// Turn off `verbose!` output (no-op without the `verbose` feature).
#[cfg(feature = "verbose")]
pub fn disable_verbose() {
    VERBOSE_SWITCH.store(false, Ordering::SeqCst);
}
/// Turn off `verbose!` output (no-op without the `verbose` feature).
#[cfg(not(feature = "verbose"))]
pub fn disable_verbose() {}

/// Whether `verbose!` output currently emits.
#[cfg(feature = "verbose")]
pub fn is_verbose_enabled() -> bool {
    VERBOSE_SWITCH.load(Ordering::SeqCst)
}
/// Whether `verbose!` output currently emits (always false without `verbose`).
#[cfg(not(feature = "verbose"))]
pub fn is_verbose_enabled() -> bool {
    false
}

/// Open `path` in append mode and route tagged messages there from now on.
/// Returns false when the file cannot be opened.
///
/// # Panics
///
/// Panics if the sink mutex is poisoned.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            *LOG_SINK.lock().unwrap() = Some(file);
            true
        })
}

/// Open `path` in append mode (always fails without `file-logging`).
#[cfg(not(feature = "file-logging"))]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Append one tagged line to the log file. Returns false when no sink is
/// active so the caller can fall back to the console.
#[cfg(feature = "file-logging")]
fn write_to_sink(line: &str) -> bool {
    let Ok(mut sink) = LOG_SINK.lock() else {
        return false;
    };
    let Some(file) = sink.as_mut() else {
        return false;
    };
    let _ = writeln!(file, "{line}");
    let _ = file.flush();
    true
}

#[cfg(not(feature = "file-logging"))]
fn write_to_sink(_line: &str) -> bool {
    false
}

/// Print one tagged line to the platform console.
#[allow(dead_code)]
fn write_to_console(level: Level, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let js = JsValue::from_str(line);
        match level {
            Level::Error => console::error_1(&js),
            Level::Warn => console::warn_1(&js),
            Level::Info | Level::Debug => console::log_1(&js),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if level.use_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Feature gate plus runtime level check for one message.
#[allow(dead_code)]
fn passes_filter(level: Level) -> bool {
    match level {
        Level::Info if !cfg!(feature = "log-info") => return false,
        Level::Debug if !cfg!(feature = "log-debug") => return false,
        _ => {}
    }

    let current = CURRENT_LEVEL.load(Ordering::SeqCst);
    (level as u8) <= current && (level != Level::Debug || is_debug_enabled())
}

/// Dispatch used by the public macros. Formats the message, applies the
/// level filter, and routes it to the file sink or the console.
pub fn log_impl(level: Level, args: Arguments) {
    if !passes_filter(level) {
        return;
    }
    let line = format!("{} {}", level.tag(), args);
    if !write_to_sink(&line) {
        write_to_console(level, &line);
    }
}

#[macro_export]
/// Log an error-level message (always compiled; stderr on native).
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Log a warning-level message (always compiled; stderr on native).
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Log an info-level message (requires the `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Log a debug-level message (requires `log-debug` and the runtime switch).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Print an untagged progress message (requires `verbose` and the runtime
/// switch). Verbose output never goes to the log file.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}
