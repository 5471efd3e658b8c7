//! # Tarefas - local task tracker
//!
//! A to-do list kept in a local SQLite database: add tasks, search and
//! filter them, toggle their status between pending and completed, and
//! remove them.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, complete and remove tasks
//! - **Search and Filtering**: Substring search over title and description,
//!   combined with an optional status filter
//! - **Safe Mutations**: Selections are resolved to concrete row ids before
//!   a change, and ambiguous matches are confirmed with the affected count
//! - **Classified Storage Errors**: Operational, integrity and unexpected
//!   failures as a typed taxonomy callers can branch on
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
