use super::open_repository;
use crate::{
    libs::{config::Config, messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show, the configured default when omitted
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let filter = args.filter.unwrap_or(config.default_filter);

    let live = open_repository(&config)?.tasks(filter)?;
    let tasks = live.current();

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound(filter));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(filter), true);
    View::tasks(tasks)
}
