use super::{find_task, open_repository};
use crate::{
    libs::{config::Config, formatter, messages::Message, task::Task},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    id: i64,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description, an empty value clears it
    #[arg(long)]
    description: Option<String>,
    /// New due date as YYYY-MM-DD
    #[arg(short = 'd', long)]
    due: Option<String>,
    /// New image path, an empty value clears it
    #[arg(long)]
    image: Option<String>,
    /// New voice note path, an empty value clears it
    #[arg(long)]
    voice: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let repository = open_repository(&Config::read()?)?;
    let Some(task) = find_task(&repository, args.id)? else {
        return Ok(());
    };

    let edited = apply_edits(&task, &args)?;
    if edited == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    repository.update_task(&edited)?;

    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}

fn apply_edits(task: &Task, args: &EditArgs) -> Result<Task> {
    let mut edited = task.clone();

    if let Some(title) = &args.title {
        edited.title = title.clone();
    }
    if let Some(due) = &args.due {
        match formatter::parse_due_date(due) {
            Some(date) => edited.due_date = date,
            None => msg_bail_anyhow!(Message::InvalidDueDate(due.clone())),
        }
    }
    if let Some(description) = &args.description {
        edited.description = non_empty(description);
    }
    if let Some(image) = &args.image {
        edited.image_path = non_empty(image);
    }
    if let Some(voice) = &args.voice {
        edited.voice_note_path = non_empty(voice);
    }

    Ok(edited)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
