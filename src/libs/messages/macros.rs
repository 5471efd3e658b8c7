//! Convenience macros for user-facing messages.
//!
//! The macros route output either to the console (normal mode) or to the
//! tracing system (debug mode), so commands never have to care which one
//! is active. Debug mode is detected once and cached.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is on when either `TAREFAS_DEBUG` or `RUST_LOG` is set in the
/// environment; in that mode messages go through `tracing` instead of
/// plain console output.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TAREFAS_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message, optionally wrapped in blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix. Goes to stderr in normal mode so
/// errors stay separate from regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}
