use super::db::Db;
use super::error::StoreError;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use rusqlite::{params, params_from_iter, Connection};
use tracing::debug;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT title, description, status FROM tasks";
const WHERE_MATCH: &str = "WHERE (title LIKE ?1 OR description LIKE ?1)";
const AND_STATUS: &str = "AND status = ?2";
const SELECT_IDS: &str = "SELECT id FROM tasks WHERE title = ?1 AND description = ?2 AND status = ?3";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// The task store: one table, all access through parameterized statements.
///
/// Rows carry no identity beyond the surrogate `id`; for composite
/// operations a task is matched by the exact `(title, description, status)`
/// triple, so duplicates are indistinguishable and a triple may resolve to
/// zero, one or many rows. [`Tasks::ids_matching`] exposes that resolution
/// so callers can pin the affected rows down before mutating.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Wraps the connection and ensures the table exists. Safe to call on
    /// every startup.
    pub fn new(db: Db) -> Result<Tasks, StoreError> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: db.conn })
    }

    /// Appends one row. No uniqueness is enforced; validating non-empty
    /// fields is the caller's job.
    pub fn insert(&mut self, task: &Task) -> Result<(), StoreError> {
        self.conn.execute(INSERT_TASK, params![task.title, task.description, task.status])?;
        Ok(())
    }

    /// Returns tasks matching the filter, in storage order.
    ///
    /// A present query matches as a substring against title OR description
    /// (`LIKE`, so case sensitivity is the engine default); a present status
    /// narrows the result to that status. With neither, all rows come back.
    pub fn search(&mut self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let (sql, params) = match (filter.query(), filter.status) {
            (None, None) => (SELECT_TASKS.to_string(), vec![]),
            (query, status) => {
                let pattern = match query {
                    Some(q) => format!("%{}%", q),
                    None => "%".to_string(),
                };
                let mut sql = format!("{} {}", SELECT_TASKS, WHERE_MATCH);
                let mut params = vec![pattern];
                if let Some(status) = status {
                    sql = format!("{} {}", sql, AND_STATUS);
                    params.push(status.as_str().to_string());
                }
                (sql, params)
            }
        };
        debug!(%sql, "searching tasks");

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(Task {
                id: None,
                title: row.get(0)?,
                description: row.get(1)?,
                status: row.get(2)?,
            })
        })?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Surrogate ids of the rows matching the triple exactly, in storage
    /// order.
    pub fn ids_matching(&mut self, title: &str, description: &str, status: TaskStatus) -> Result<Vec<i64>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_IDS)?;
        let id_iter = stmt.query_map(params![title, description, status], |row| row.get(0))?;
        let mut ids = Vec::new();
        for id_result in id_iter {
            ids.push(id_result?);
        }

        Ok(ids)
    }

    /// Updates one row by surrogate id; returns the affected count (0 when
    /// the id no longer exists).
    pub fn set_status(&mut self, id: i64, new_status: TaskStatus) -> Result<usize, StoreError> {
        Ok(self.conn.execute(UPDATE_STATUS, params![id, new_status])?)
    }

    /// Deletes one row by surrogate id; returns the affected count.
    pub fn delete(&mut self, id: i64) -> Result<usize, StoreError> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    /// Updates every row matching the triple. Zero or multiple matches are
    /// not errors; the affected count tells the caller what happened.
    pub fn update_status(
        &mut self,
        title: &str,
        description: &str,
        current: TaskStatus,
        new_status: TaskStatus,
    ) -> Result<usize, StoreError> {
        let mut affected = 0;
        for id in self.ids_matching(title, description, current)? {
            affected += self.set_status(id, new_status)?;
        }
        debug!(title, affected, "updated task status");

        Ok(affected)
    }

    /// Deletes every row matching the triple, with the same multiplicity
    /// semantics as [`Tasks::update_status`].
    pub fn remove(&mut self, title: &str, description: &str, status: TaskStatus) -> Result<usize, StoreError> {
        let mut affected = 0;
        for id in self.ids_matching(title, description, status)? {
            affected += self.delete(id)?;
        }
        debug!(title, affected, "removed tasks");

        Ok(affected)
    }
}
