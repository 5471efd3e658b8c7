//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so the rest of the code
//! deals only in structured [`Message`] values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added successfully", title),
            Message::TaskStatusUpdated(title, status) => format!("Task '{}' is now {}", title, status),
            Message::TaskRemoved(title) => format!("Task '{}' removed successfully", title),
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoMatchingTasks => "No task matched the selection".to_string(),
            Message::ConfirmToggle(title, status) => format!("Change status of task '{}' to {}?", title, status),
            Message::ConfirmToggleMany(title, status, count) => {
                format!("{} tasks match '{}'. Change status of all of them to {}?", count, title, status)
            }
            Message::ConfirmRemove(title) => format!("Remove task '{}'?", title),
            Message::ConfirmRemoveMany(title, count) => format!("{} tasks match '{}'. Remove all of them?", count, title),
            Message::SelectTask => "Select a task".to_string(),
            Message::FillAllFields => "Fill all fields correctly".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDbFile => "Database file path (leave empty for the default)".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
