//! Task record and form-value decoding.
//!
//! A [`Task`] is the only record the application stores. It is produced by the
//! gateway in [`crate::db::tasks`] and handed unchanged to the view layer.

use serde::{Deserialize, Serialize};

/// One row of the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    /// Task description, never empty once persisted.
    pub task: String,
    /// Completion flag.
    pub done: bool,
}

impl Task {
    pub fn new(id: i64, task: &str, done: bool) -> Self {
        Task {
            id,
            task: task.to_string(),
            done,
        }
    }
}

/// Decodes the `done` form value into a boolean.
///
/// The vocabulary is case-insensitive and ignores surrounding whitespace:
///
/// | Input          | Result  |
/// |----------------|---------|
/// | `yes`, `on`    | `true`  |
/// | `no`, `off`    | `false` |
/// | anything else  | `false` |
///
/// The function is total. An unchecked checkbox sends no value at all, which
/// arrives here as an empty string and therefore reads as not done.
///
/// # Examples
///
/// ```rust
/// use tasklist::libs::task::parse_done;
///
/// assert!(parse_done("on"));
/// assert!(parse_done("YES"));
/// assert!(!parse_done("off"));
/// assert!(!parse_done("maybe"));
/// ```
pub fn parse_done(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "on" => true,
        "no" | "off" => false,
        _ => false,
    }
}

/// Normalizes task text from a form and rejects blank input.
///
/// Returns the trimmed text, or `None` when nothing but whitespace was sent.
pub fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
