//! SQLite connection pool shared by every request.
//!
//! A `Db` owns a fixed number of connections, each behind a `parking_lot`
//! mutex. Callers check one out for a single statement via [`Db::connection`]
//! and release it when the guard drops. Cloning a `Db` clones handles to the
//! same pool.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "tasklist.db";
pub const DEFAULT_POOL_SIZE: usize = 4;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    done BOOLEAN NOT NULL DEFAULT FALSE
)";

#[derive(Clone)]
pub struct Db {
    connections: Arc<Vec<Mutex<Connection>>>,
    cursor: Arc<AtomicUsize>,
    location: Arc<String>,
}

impl Db {
    /// Opens `pool_size` connections to the database file at `path`.
    ///
    /// The schema is created on the first connection if it does not exist yet.
    /// A `pool_size` of zero is treated as one. An empty path is rejected:
    /// SQLite would give every connection its own private temporary database.
    pub fn open(path: &Path, pool_size: usize) -> Result<Db> {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(msg_error_anyhow!(Message::DatabasePathEmpty));
        }

        let pool_size = pool_size.max(1);
        let mut connections = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            connections.push(Connection::open(path)?);
        }
        Db::from_connections(connections, path.display().to_string())
    }

    /// Opens a private in-memory database.
    ///
    /// Always a single connection: separate in-memory connections would each
    /// see their own empty database.
    pub fn open_in_memory() -> Result<Db> {
        Db::from_connections(vec![Connection::open_in_memory()?], ":memory:".to_string())
    }

    fn from_connections(connections: Vec<Connection>, location: String) -> Result<Db> {
        if let Some(first) = connections.first() {
            first.execute(SCHEMA_TASKS, [])?;
        }

        Ok(Db {
            connections: Arc::new(connections.into_iter().map(Mutex::new).collect()),
            cursor: Arc::new(AtomicUsize::new(0)),
            location: Arc::new(location),
        })
    }

    /// Checks out a connection.
    ///
    /// Any idle connection is taken first, starting from a round-robin
    /// position. When all are busy the caller blocks on the connection at that
    /// starting position, even if another one is released sooner.
    pub fn connection(&self) -> MutexGuard<'_, Connection> {
        let len = self.connections.len();
        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % len;

        for offset in 0..len {
            if let Some(guard) = self.connections[(start + offset) % len].try_lock() {
                return guard;
            }
        }
        self.connections[start].lock()
    }

    pub fn pool_size(&self) -> usize {
        self.connections.len()
    }

    /// File path of the database, or `:memory:`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_in_memory(&self) -> bool {
        self.location.as_str() == ":memory:"
    }
}

/// Resolves the database file from an optional configured path.
pub fn resolve_path(configured: Option<&str>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
    }
}
