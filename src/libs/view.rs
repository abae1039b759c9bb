use super::formatter::{format_status, format_timestamp};
use super::quick_tasks::QuickTask;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "DESCRIPTION", "DUE", "STATUS"]);
        for (position, task) in tasks.iter().enumerate() {
            table.add_row(row![
                position + 1,
                task.id.unwrap_or(0),
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.due_date,
                format_status(task.is_completed)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description.as_deref().unwrap_or("")]);
        table.add_row(row!["DUE", task.due_date]);
        table.add_row(row!["STATUS", format_status(task.is_completed)]);
        table.add_row(row!["IMAGE", task.image_path.as_deref().unwrap_or("")]);
        table.add_row(row!["VOICE NOTE", task.voice_note_path.as_deref().unwrap_or("")]);
        table.add_row(row!["CREATED", format_timestamp(task.created_at)]);
        table.add_row(row!["UPDATED", format_timestamp(task.updated_at)]);
        table.printstd();

        Ok(())
    }

    pub fn quick_tasks(tasks: &[QuickTask]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "DESCRIPTION", "STATUS"]);
        for (position, task) in tasks.iter().enumerate() {
            table.add_row(row![
                position + 1,
                task.title,
                task.description.as_deref().unwrap_or(""),
                format_status(task.is_completed)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
