//! The task list controller.
//!
//! Mediates user intents into store calls: validates input before an
//! insert, resolves a selection to concrete row ids before a mutation,
//! asks for confirmation, and keeps the visible list in sync by re-running
//! the current search after every change.

use crate::db::error::StoreError;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use dialoguer::{theme::ColorfulTheme, Confirm};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A required field was left empty.
    #[error("fill all fields correctly")]
    Validation,
    /// The user declined the confirmation prompt.
    #[error("confirmation declined")]
    Cancelled,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Confirmation seam between the controller and the user.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Asks on the terminal via a dialoguer prompt. A prompt that cannot be
/// shown counts as a decline, so nothing is mutated.
pub struct DialogConfirmer;

impl Confirmer for DialogConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Holds the one store instance plus the current filter and the visible
/// set of tasks. Mutations go through the surrogate ids resolved at
/// selection time; when a selection is ambiguous (duplicate tasks), the
/// confirmation prompt states how many rows are affected instead of
/// silently acting on all of them.
pub struct TaskList<C> {
    store: Tasks,
    confirmer: C,
    filter: TaskFilter,
    tasks: Vec<Task>,
}

impl<C: Confirmer> TaskList<C> {
    pub fn new(store: Tasks, confirmer: C) -> Result<Self, TaskError> {
        let mut list = TaskList {
            store,
            confirmer,
            filter: TaskFilter::default(),
            tasks: Vec::new(),
        };
        list.refresh()?;
        Ok(list)
    }

    /// The currently visible tasks, as of the last refresh.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validates the required fields, inserts the task and refreshes.
    pub fn add(&mut self, title: &str, description: &str, status: TaskStatus) -> Result<(), TaskError> {
        if title.is_empty() || description.is_empty() {
            return Err(TaskError::Validation);
        }
        self.store.insert(&Task::new(title, description, status))?;
        self.refresh()
    }

    /// Replaces the current filter and re-reads the visible list.
    pub fn apply_filter(&mut self, query: Option<String>, status: Option<TaskStatus>) -> Result<&[Task], TaskError> {
        self.filter = TaskFilter { query, status };
        self.refresh()?;
        Ok(&self.tasks)
    }

    /// Flips the selected task between pending and completed.
    ///
    /// Returns the number of rows changed; zero matches succeed with 0.
    /// Declining the confirmation fails with [`TaskError::Cancelled`] and
    /// changes nothing.
    pub fn toggle_status(&mut self, selection: &Task) -> Result<usize, TaskError> {
        let new_status = selection.status.toggled();
        let ids = self.store.ids_matching(&selection.title, &selection.description, selection.status)?;
        let prompt = match ids.len() {
            n if n > 1 => Message::ConfirmToggleMany(selection.title.clone(), new_status, n),
            _ => Message::ConfirmToggle(selection.title.clone(), new_status),
        };
        if !self.confirmer.confirm(&prompt.to_string()) {
            return Err(TaskError::Cancelled);
        }

        let mut affected = 0;
        for id in ids {
            affected += self.store.set_status(id, new_status)?;
        }
        self.refresh()?;

        Ok(affected)
    }

    /// Removes the selected task, with the same confirmation and
    /// multiplicity semantics as [`TaskList::toggle_status`].
    pub fn remove(&mut self, selection: &Task) -> Result<usize, TaskError> {
        let ids = self.store.ids_matching(&selection.title, &selection.description, selection.status)?;
        let prompt = match ids.len() {
            n if n > 1 => Message::ConfirmRemoveMany(selection.title.clone(), n),
            _ => Message::ConfirmRemove(selection.title.clone()),
        };
        if !self.confirmer.confirm(&prompt.to_string()) {
            return Err(TaskError::Cancelled);
        }

        let mut affected = 0;
        for id in ids {
            affected += self.store.delete(id)?;
        }
        self.refresh()?;

        Ok(affected)
    }

    /// Re-runs the current search and replaces the whole visible set.
    pub fn refresh(&mut self) -> Result<(), TaskError> {
        self.tasks = self.store.search(&self.filter)?;
        Ok(())
    }
}
