//! Minimal, zero-dependency logging for the letix workspace.
//!
//! Diagnostics go to stderr so they never mix with program output on
//! stdout (the CLI prints evaluation results there). The minimum level
//! is a process-wide atomic; it can be raised programmatically or via
//! the `LETIX_LOG` environment variable.
//!
//! # Example
//!
//! ```
//! use letix_log::{info, debug, Level};
//!
//! letix_log::set_level(Level::Debug);
//! info!("checking {} constraints", 7);
//! debug!("classes: {:?}", vec![1, 2]);
//! ```

#![warn(missing_docs)]

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a log message, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures that abort the current operation.
    Error = 0,
    /// Suspicious but recoverable situations.
    Warn = 1,
    /// High-level progress messages.
    Info = 2,
    /// Per-stage diagnostic detail.
    Debug = 3,
}

impl Level {
    /// Returns the fixed-width tag printed for this level.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
        }
    }

    /// Parses a level name, case-insensitively.
    ///
    /// ```
    /// use letix_log::Level;
    ///
    /// assert_eq!(Level::parse("warn"), Some(Level::Warn));
    /// assert_eq!(Level::parse("DEBUG"), Some(Level::Debug));
    /// assert_eq!(Level::parse("loud"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Level> {
        match name.to_ascii_lowercase().as_str() {
            "error" => Some(Level::Error),
            "warn" | "warning" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            _ => None,
        }
    }

    fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            3 => Level::Debug,
            _ => Level::Info,
        }
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Sets the process-wide minimum level.
pub fn set_level(level: Level) {
    MIN_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Returns the current minimum level.
pub fn level() -> Level {
    Level::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

/// Returns true if a message at `level` would be emitted.
pub fn enabled(level: Level) -> bool {
    level as u8 <= MIN_LEVEL.load(Ordering::Relaxed)
}

/// Initializes the minimum level from the `LETIX_LOG` environment
/// variable. Unset or unrecognized values leave the level unchanged.
pub fn init_from_env() {
    if let Ok(value) = std::env::var("LETIX_LOG")
        && let Some(level) = Level::parse(&value)
    {
        set_level(level);
    }
}

/// Emits one formatted record. Called by the macros after the level
/// check; not intended for direct use.
#[doc(hidden)]
pub fn emit(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";
    eprintln!("{}{}{} {}: {}", level.color(), level.tag(), RESET, target, args);
}

/// Logs at an explicit level, capturing the caller's module path.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        if $crate::enabled($level) {
            $crate::emit($level, module_path!(), format_args!($($arg)*));
        }
    };
}

/// Logs at [`Level::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log!($crate::Level::Error, $($arg)*) };
}

/// Logs at [`Level::Warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log!($crate::Level::Warn, $($arg)*) };
}

/// Logs at [`Level::Info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log!($crate::Level::Info, $($arg)*) };
}

/// Logs at [`Level::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log!($crate::Level::Debug, $($arg)*) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Level::parse("error"), Some(Level::Error));
        assert_eq!(Level::parse("Warning"), Some(Level::Warn));
        assert_eq!(Level::parse("INFO"), Some(Level::Info));
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn test_filtering() {
        set_level(Level::Info);
        assert!(enabled(Level::Error));
        assert!(enabled(Level::Info));
        assert!(!enabled(Level::Debug));

        set_level(Level::Debug);
        assert!(enabled(Level::Debug));
    }

    #[test]
    fn test_macros_compile() {
        set_level(Level::Info);
        info!("value is {}", 42);
        debug!("suppressed: {:?}", [1, 2, 3]);
    }
}
