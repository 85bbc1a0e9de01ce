//! Human-readable text for every [`Message`] variant.
//!
//! All log and error wording lives here so handlers, the CLI and the server
//! loop never format ad-hoc strings. Texts for client-facing errors double as the
//! plain-text bodies of 4xx responses.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SERVER MESSAGES ===
            Message::ServerStarting(version) => format!("Starting tasklist v{}", version),
            Message::ServerListening(addr) => format!("Listening on http://{}", addr),
            Message::ServerRoute(method, path) => format!("  {:<6} {}", method, path),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalReceived => "Shutdown signal received, finishing in-flight requests".to_string(),
            Message::ShutdownSignalFailed(err) => format!("Failed to listen for shutdown signal: {}", err),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path, size) => format!("Database opened at {} ({} connections)", path, size),
            Message::DatabaseInMemory => "Using in-memory database (data is lost on exit)".to_string(),
            Message::DatabasePathEmpty => "Database path must not be empty".to_string(),

            // === TEMPLATE MESSAGES ===
            Message::TemplatesLoaded(dir, count) => format!("Loaded {} templates from {}", count, dir),
            Message::TemplatesBuiltin => "Using built-in templates".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id, affected) => format!("Task {} deleted ({} rows)", id, affected),
            Message::TaskTextRequired => "Task is required".to_string(),
            Message::InvalidTaskId(raw) => format!("Invalid task ID: '{}'", raw),

            // === REQUEST MESSAGES ===
            Message::RequestRejected(status, reason) => format!("Request rejected with {}: {}", status, reason),
            Message::RequestFailed(status, reason) => format!("Request failed with {}: {}", status, reason),
            Message::FormBodyIgnored(reason) => format!("Form body ignored, treating it as empty: {}", reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigDefaults => "No configuration file found, using defaults".to_string(),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigExists(path) => format!("Configuration already exists at {} (use --force to overwrite)", path),
            Message::ConfigDeleted(path) => format!("Configuration removed from {}", path),
            Message::ConfigInvalidValue(key, value) => format!("Invalid value for {}: '{}'", key, value),
            Message::ConfigPoolSizeZero => "Database pool size must be at least 1".to_string(),
        };
        write!(f, "{}", text)
    }
}
