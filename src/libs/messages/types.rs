use crate::libs::task::TaskStatus;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskStatusUpdated(String, TaskStatus),
    TaskRemoved(String),
    TasksHeader,
    NoTasksFound,
    NoMatchingTasks,
    ConfirmToggle(String, TaskStatus),
    ConfirmToggleMany(String, TaskStatus, usize),
    ConfirmRemove(String),
    ConfirmRemoveMany(String, usize),
    SelectTask,
    FillAllFields,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDbFile,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
