use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.title, task.description, task.status]);
        }
        table.printstd();

        Ok(())
    }
}
