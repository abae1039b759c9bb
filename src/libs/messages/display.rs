//! Display implementation for tasksync application messages.
//!
//! All user-facing text lives here, so commands and the session screen only
//! ever name a [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskQueued => "Task saved, the list will update shortly".to_string(),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskToggled { id, completed: true } => format!("Task {} marked as completed", id),
            Message::TaskToggled { id, completed: false } => format!("Task {} marked as pending", id),
            Message::NoTasksFound(filter) => format!("No tasks in {}.", filter),
            Message::TasksHeader(filter) => format!("{} tasks", filter),
            Message::TaskDetailHeader => "Task details".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskImagePath => "Image path (optional)".to_string(),
            Message::PromptTaskVoiceNotePath => "Voice note path (optional)".to_string(),
            Message::SelectTask => "Select a task".to_string(),

            // === QUICK TASK MESSAGES ===
            Message::QuickTasksHeader => "Quick tasks".to_string(),
            Message::QuickTasksEmpty => "No quick tasks yet. They disappear when the session ends.".to_string(),
            Message::QuickTaskDialogTitle => "New quick task".to_string(),
            Message::QuickTaskDialogCreate => "Create".to_string(),
            Message::QuickTaskDialogCancel => "Cancel".to_string(),
            Message::PromptQuickTaskTitle => "Title".to_string(),
            Message::PromptQuickTaskDescription => "Description (optional)".to_string(),
            Message::SelectQuickTask => "Select a quick task".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionPrompt => "What next?".to_string(),
            Message::SessionShowFilter { filter, count, active: true } => format!("[{} ({})]", filter, count),
            Message::SessionShowFilter { filter, count, active: false } => format!("Show {} ({})", filter, count),
            Message::SessionNewTask => "New task".to_string(),
            Message::SessionToggleTask => "Toggle task".to_string(),
            Message::SessionOpenTask => "Open task".to_string(),
            Message::SessionNewQuickTask => "New quick task".to_string(),
            Message::SessionToggleQuickTask => "Toggle quick task".to_string(),
            Message::SessionQuit => "Quit".to_string(),
            Message::SessionEnded => "Session ended, quick tasks discarded.".to_string(),
            Message::ControllerNotStarted => "Task list is not started".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply".to_string(),
            Message::ConfigNotFound => "No stored configuration, nothing to remove".to_string(),
            Message::PromptDefaultFilter => "Filter shown when a session starts".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseInitialized => "Database initialized".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };
        write!(f, "{}", text)
    }
}
