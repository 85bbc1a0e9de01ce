use super::db::Db;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::Task;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (task, done) VALUES (?1, FALSE)";
const SELECT_TASKS: &str = "SELECT id, task, done FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, task, done FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET task = ?2, done = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Persistence gateway for the `tasks` table.
///
/// Every method runs exactly one statement on one pooled connection. Nothing
/// is cached: each read goes to the store.
#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db }
    }

    /// All tasks in the store's natural (primary key) order.
    pub fn list_all(&self) -> TaskResult<Vec<Task>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// The task with `id`, or [`TaskError::NotFound`].
    pub fn fetch_by_id(&self, id: i64) -> TaskResult<Task> {
        self.db
            .connection()
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Inserts a new open task and returns its id.
    pub fn create(&self, text: &str) -> TaskResult<i64> {
        let conn = self.db.connection();
        conn.execute(INSERT_TASK, params![text])?;
        Ok(conn.last_insert_rowid())
    }

    /// Rewrites text and done together.
    ///
    /// Returns the affected row count, or [`TaskError::NotFound`] when no row
    /// has `id`.
    pub fn update(&self, id: i64, text: &str, done: bool) -> TaskResult<usize> {
        let affected = self.db.connection().execute(UPDATE_TASK, params![id, text, done])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(affected)
    }

    /// Removes the task with `id` and returns the affected row count.
    ///
    /// Deleting an unknown id affects zero rows and is not an error.
    pub fn delete(&self, id: i64) -> TaskResult<usize> {
        Ok(self.db.connection().execute(DELETE_TASK, params![id])?)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        let task: String = row.get(1)?;
        Ok(Task::new(row.get(0)?, &task, row.get(2)?))
    }
}
