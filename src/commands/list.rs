use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::libs::tasklist::{DialogConfirmer, TaskList};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Substring to match against title or description
    query: Option<String>,
    /// Only show tasks with this status
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = Tasks::new(Db::new()?)?;
    let mut list = TaskList::new(store, DialogConfirmer)?;

    let tasks = list.apply_filter(args.query, args.status)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks)?;
    Ok(())
}
