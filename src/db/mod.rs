//! Database layer for the tarefas application.
//!
//! A thin persistence layer over a single SQLite file: one long-lived
//! connection, one `tasks` table, and parameterized statements for every
//! operation. Failures are classified into a small typed taxonomy instead
//! of being surfaced as message strings.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::db::{db::Db, tasks::Tasks};
//! use tarefas::libs::task::{Task, TaskStatus};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new(Db::new()?)?;
//! tasks.insert(&Task::new("Review code", "Check PR #123", TaskStatus::Pending))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection module.
///
/// Provides the `Db` struct that opens the SQLite connection, either at a
/// configured path or under the platform data directory.
pub mod db;

/// Classified storage errors.
///
/// Maps `rusqlite` failures into operational / integrity / unexpected
/// categories that callers can branch on.
pub mod error;

/// Task storage operations.
///
/// Table bootstrap, insertion, substring search with optional status
/// filtering, and status updates and deletion keyed either by surrogate id
/// or by the full `(title, description, status)` triple.
pub mod tasks;
