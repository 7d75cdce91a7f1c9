#![deny(missing_docs)]
//! Shared logging utilities for the sorting workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the id of the sorting run active on the current thread, so
//! interleaved runs can be told apart in a single log file.

use std::cell::Cell;
use std::fmt;

thread_local! {
    /// Thread-local storage for the id of the run currently being executed.
    static RUN_ID: Cell<u64> = const { Cell::new(0) };
}

/// Sets the run id for the current thread.
///
/// Async code must not rely on this surviving an `.await`; use
/// [`with_run_id`] around the logging call instead.
pub fn set_run_id(run_id: u64) {
    RUN_ID.with(|v| v.set(run_id));
}

/// Runs `f` with `run_id` as the current thread's run id, then puts the
/// previous id back.
pub fn with_run_id<R>(run_id: u64, f: impl FnOnce() -> R) -> R {
    struct Restore(u64);
    impl Drop for Restore {
        fn drop(&mut self) {
            set_run_id(self.0);
        }
    }

    let _restore = Restore(current_run_id());
    set_run_id(run_id);
    f()
}

/// Retrieves the run id for the current thread.
/// Returns 0 when no run has been started on this thread.
pub fn current_run_id() -> u64 {
    RUN_ID.with(|v| v.get())
}

/// Prefix written in front of every `engine_*` message.
///
/// Renders as `[run N] ` while a run is active and as nothing otherwise.
pub struct RunTag(u64);

impl RunTag {
    /// Captures the run id of the current thread.
    pub fn current() -> Self {
        Self(current_run_id())
    }
}

impl fmt::Display for RunTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            Ok(())
        } else {
            write!(f, "[run {}] ", self.0)
        }
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::RunTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::RunTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::RunTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::RunTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::RunTag::current(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
