pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod session;
pub mod show;
pub mod toggle;

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::Task;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Show a task")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Toggle task completion")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Open the interactive task list")]
    Session(session::SessionArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Session(args) => session::cmd(args).await,
        }
    }
}

/// Repository over the database named by the stored configuration.
pub(crate) fn open_repository(config: &Config) -> Result<TaskRepository> {
    let tasks = Tasks::from_db(Db::from_config(config)?);
    Ok(TaskRepository::new(tasks))
}

/// Looks a task up by id, printing a message when it does not exist.
pub(crate) fn find_task(repository: &TaskRepository, id: i64) -> Result<Option<Task>> {
    let task = repository.get_task_by_id(id)?;
    if task.is_none() {
        msg_error!(Message::TaskNotFoundWithId(id));
    }
    Ok(task)
}
