use super::select_task;
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskStatus};
use crate::libs::tasklist::{DialogConfirmer, TaskError, TaskList};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Title of the task to toggle
    title: Option<String>,
    /// Description of the task to toggle
    description: Option<String>,
    /// Current status of the task
    status: Option<TaskStatus>,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let store = Tasks::new(Db::new()?)?;
    let mut list = TaskList::new(store, DialogConfirmer)?;

    let selection = match (args.title, args.description, args.status) {
        (Some(title), Some(description), Some(status)) => Task::new(&title, &description, status),
        _ => match select_task(list.tasks())? {
            Some(task) => task,
            None => {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
        },
    };

    match list.toggle_status(&selection) {
        Ok(0) => msg_info!(Message::NoMatchingTasks),
        Ok(_) => msg_success!(Message::TaskStatusUpdated(selection.title.clone(), selection.status.toggled())),
        Err(TaskError::Cancelled) => msg_info!(Message::OperationCancelled),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
