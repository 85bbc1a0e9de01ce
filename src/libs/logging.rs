//! Tracing subscriber setup for the server.
//!
//! `RUST_LOG` is honored verbatim when present. Otherwise the filter is
//! `info`, or `debug` for this crate and the HTTP trace layer when
//! `TASKLIST_DEBUG` is set.

use super::messages::macros::{is_debug_mode, mark_tracing_ready};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const DEBUG_FILTER: &str = "info,tasklist=debug,tower_http=debug";

/// Installs the global `fmt` subscriber and routes message macros to it.
///
/// Calling it twice is harmless: the second installation attempt is ignored.
pub fn init() {
    let fallback = if is_debug_mode() { DEBUG_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init().is_ok() {
        mark_tracing_ready();
    }
}
