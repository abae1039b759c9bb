use super::open_repository;
use crate::{
    libs::{config::Config, formatter, messages::Message, task::Task},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Due date as YYYY-MM-DD, today when omitted
    #[arg(short = 'd', long)]
    due: Option<String>,
    /// Longer description
    #[arg(long)]
    description: Option<String>,
    /// Path of an attached image
    #[arg(long)]
    image: Option<String>,
    /// Path of an attached voice note
    #[arg(long)]
    voice: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let due_date = match args.due {
        Some(due) => formatter::parse_due_date(&due).ok_or_else(|| msg_error_anyhow!(Message::InvalidDueDate(due.clone())))?,
        None => formatter::today(),
    };

    let task = Task::new(&args.title, &due_date)
        .with_description(args.description.as_deref())
        .with_image_path(args.image.as_deref())
        .with_voice_note_path(args.voice.as_deref());

    let repository = open_repository(&Config::read()?)?;
    let id = repository.insert_task(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
