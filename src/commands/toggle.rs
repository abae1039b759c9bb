use super::{find_task, open_repository};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id
    id: i64,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let repository = open_repository(&Config::read()?)?;
    let Some(task) = find_task(&repository, args.id)? else {
        return Ok(());
    };

    let updated = repository.toggle_task_completion(&task)?;

    msg_success!(Message::TaskToggled {
        id: args.id,
        completed: updated.is_completed
    });
    Ok(())
}
