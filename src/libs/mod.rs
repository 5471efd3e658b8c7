//! Core library modules for the tarefas application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::db::{db::Db, tasks::Tasks};
//! use tarefas::libs::task::{Task, TaskStatus};
//! use tarefas::libs::tasklist::{DialogConfirmer, TaskList};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = Tasks::new(Db::new()?)?;
//! let mut list = TaskList::new(store, DialogConfirmer)?;
//! list.add("Implement feature", "Add user authentication", TaskStatus::Pending)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod tasklist;
pub mod view;
