use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::libs::tasklist::{DialogConfirmer, TaskError, TaskList};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Task description
    description: String,
    /// Create the task already completed
    #[arg(long)]
    done: bool,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let store = Tasks::new(Db::new()?)?;
    let mut list = TaskList::new(store, DialogConfirmer)?;

    let status = if args.done { TaskStatus::Completed } else { TaskStatus::Pending };
    match list.add(&args.title, &args.description, status) {
        Ok(()) => {
            msg_success!(Message::TaskAdded(args.title));
            Ok(())
        }
        Err(TaskError::Validation) => {
            msg_error!(Message::FillAllFields);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
