//! Task records and the list filter.
//!
//! A [`Task`] is a row of the persisted `tasks` table. [`TaskFilter`] selects
//! which subset of the table a view shows, and doubles as the query selector
//! for [`crate::db::tasks::Tasks::fetch`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A persisted to-do item.
///
/// `id` is `None` until the record has been inserted; storage assigns it.
/// `due_date` is kept as text and is not interpreted by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub is_completed: bool,
    pub image_path: Option<String>,
    pub voice_note_path: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds, refreshed whenever completion state changes.
    pub updated_at: i64,
}

impl Task {
    pub fn new(title: &str, due_date: &str) -> Self {
        let now = now_millis();
        Task {
            id: None,
            title: title.to_string(),
            description: None,
            due_date: due_date.to_string(),
            is_completed: false,
            image_path: None,
            voice_note_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn with_image_path(mut self, image_path: Option<&str>) -> Self {
        self.image_path = image_path.map(str::to_string);
        self
    }

    pub fn with_voice_note_path(mut self, voice_note_path: Option<&str>) -> Self {
        self.voice_note_path = voice_note_path.map(str::to_string);
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Which tasks a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.is_completed,
            TaskFilter::Completed => task.is_completed,
        }
    }

    /// Derives the filtered view of an unfiltered, due-date ordered list.
    ///
    /// The completed view is reordered by most recent update first so it
    /// lines up with the completed storage query.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut filtered: Vec<Task> = tasks.iter().filter(|task| self.matches(task)).cloned().collect();
        if *self == TaskFilter::Completed {
            filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        }
        filtered
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, due: &str, done: bool, updated_at: i64) -> Task {
        let mut task = Task::new(&format!("Task {}", id), due).completed(done);
        task.id = Some(id);
        task.updated_at = updated_at;
        task
    }

    #[test]
    fn filters_partition_by_completion() {
        let tasks = vec![task(1, "2024-01-01", false, 1), task(2, "2024-01-02", true, 5), task(3, "2024-01-03", true, 9)];

        assert_eq!(TaskFilter::All.apply(&tasks).len(), 3);
        let pending = TaskFilter::Pending.apply(&tasks);
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![Some(1)]);
        let completed = TaskFilter::Completed.apply(&tasks);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![Some(3), Some(2)]);
    }

    #[test]
    fn filter_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TaskFilter::Pending).unwrap(), "\"pending\"");
        let parsed: TaskFilter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskFilter::Completed);
    }
}
