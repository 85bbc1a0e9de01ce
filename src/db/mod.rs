//! Database layer.
//!
//! Built on SQLite through `rusqlite`. The store is a single table:
//!
//! ```sql
//! tasks(id INTEGER PRIMARY KEY AUTOINCREMENT, task TEXT NOT NULL, done BOOLEAN NOT NULL DEFAULT FALSE)
//! ```
//!
//! `AUTOINCREMENT` keeps SQLite from handing a deleted highest id to a new
//! row, so ids are never reused.
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::db::{db::Db, tasks::Tasks};
//!
//! let tasks = Tasks::new(Db::open_in_memory()?);
//! let id = tasks.create("buy milk")?;
//! assert_eq!(tasks.fetch_by_id(id)?.task, "buy milk");
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection pool and schema setup.
pub mod db;

/// Persistence gateway: list, fetch, create, update and delete.
pub mod tasks;
