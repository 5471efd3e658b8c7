pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod toggle;

use crate::libs::messages::Message;
use crate::libs::task::Task;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Toggle a task between pending and completed")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Remove a task")]
    Remove(remove::RemoveArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Remove(args) => remove::cmd(args),
        }
    }
}

/// Lets the user pick one of the visible tasks. Returns `None` when there
/// is nothing to pick from.
pub(crate) fn select_task(tasks: &[Task]) -> Result<Option<Task>> {
    if tasks.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = tasks
        .iter()
        .map(|task| format!("{} | {} | {}", task.title, task.description, task.status))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .interact()?;

    Ok(Some(tasks[selection].clone()))
}
