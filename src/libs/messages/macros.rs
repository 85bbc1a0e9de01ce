//! Macros for emitting application messages.
//!
//! Every macro takes a [`Message`](super::Message) (or anything implementing
//! `Display`) and routes it to one of two sinks:
//!
//! - **Tracing**: once [`crate::libs::logging::init`] has installed a
//!   subscriber, messages become `tracing` events at the matching level.
//! - **Console**: before that (for example in `tasklist init`), messages are
//!   written to stdout, or stderr for errors and warnings.
//!
//! ```text
//! msg_info!(Message::ServerListening(addr))
//!        │
//!        ├── subscriber installed? ──yes──▶ tracing::info!("ℹ️ ...")
//!        └───────────────────────────no──▶ println!("ℹ️ ...")
//! ```
//!
//! ## Macros
//!
//! - `msg_success!` with ✅ prefix
//! - `msg_info!` with ℹ️ prefix
//! - `msg_warning!` with ⚠️ prefix
//! - `msg_error!` with ❌ prefix
//! - `msg_debug!` with 🔍 prefix, only when debug output is enabled
//! - `msg_error_anyhow!` to build `anyhow` errors
//!
//! ## Debug mode
//!
//! Debug output is enabled when `TASKLIST_DEBUG` or `RUST_LOG` is set. The
//! check runs once and is cached.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Cached result of the debug-mode environment check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Set once a tracing subscriber has been installed for the process.
static TRACING_READY: AtomicBool = AtomicBool::new(false);

/// Returns `true` when `TASKLIST_DEBUG` or `RUST_LOG` is present.
///
/// The environment is read on first call only.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKLIST_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Returns `true` once [`mark_tracing_ready`] has been called.
#[doc(hidden)]
pub fn is_tracing_ready() -> bool {
    TRACING_READY.load(Ordering::Acquire)
}

/// Switches all message macros over to `tracing`.
///
/// Called by the logging setup right after the global subscriber is set.
#[doc(hidden)]
pub fn mark_tracing_ready() {
    TRACING_READY.store(true, Ordering::Release);
}

/// Reports a completed operation with a ✅ prefix.
///
/// ```rust
/// use tasklist::msg_success;
/// use tasklist::libs::messages::Message;
///
/// msg_success!(Message::ConfigSaved("/tmp/config.json".to_string()));
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_tracing_ready() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Reports informational progress with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_tracing_ready() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Reports a recoverable problem with a ⚠️ prefix.
///
/// Console output goes to stderr so it does not mix with regular output.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_tracing_ready() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️  {}", $msg);
        }
    };
}

/// Reports a failure with a ❌ prefix.
///
/// Console output goes to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_tracing_ready() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Emits diagnostic detail with a 🔍 prefix.
///
/// Through tracing, the event is always emitted at debug level and the
/// subscriber's filter decides. On the console it appears only in debug mode.
///
/// ```rust
/// use tasklist::msg_debug;
///
/// let id = 7;
/// msg_debug!(format!("Rendering update form for task {}", id));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_tracing_ready() {
            tracing::debug!("🔍 {}", $msg);
        } else if $crate::libs::messages::macros::is_debug_mode() {
            println!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
///
/// ```rust
/// use tasklist::msg_error_anyhow;
/// use tasklist::libs::messages::Message;
///
/// let err = msg_error_anyhow!(Message::ConfigPoolSizeZero);
/// assert!(err.to_string().contains("pool size"));
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
