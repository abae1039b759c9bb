//! Configuration initialization command.
//!
//! Runs the interactive wizard and stores the result, or removes the stored
//! configuration with `--delete` so defaults apply again.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete_from(&DataStorage::new())? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
