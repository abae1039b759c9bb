use super::{find_task, open_repository};
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id
    id: i64,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let repository = open_repository(&Config::read()?)?;
    let Some(task) = find_task(&repository, args.id)? else {
        return Ok(());
    };

    msg_print!(Message::TaskDetailHeader, true);
    View::task(&task)
}
