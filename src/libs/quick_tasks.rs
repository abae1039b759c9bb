//! Session-only quick tasks.
//!
//! Quick tasks are never persisted. They live in the list controller for as
//! long as it exists, newest first.

use crate::libs::task::now_millis;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

/// Raw contents of the quick task form, before trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickTaskForm {
    pub title: String,
    pub description: String,
}

/// How the quick task form was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickTaskDialog {
    Create(QuickTaskForm),
    Cancel,
}

#[derive(Debug, Clone, Default)]
pub struct QuickTaskList {
    items: Vec<QuickTask>,
}

impl QuickTaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[QuickTask] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepends a quick task.
    ///
    /// The title is trimmed and must not end up empty, otherwise nothing is
    /// added. A description that is blank after trimming is stored as `None`.
    pub fn add(&mut self, title: &str, description: Option<&str>) -> Option<&QuickTask> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let description = description.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string);

        let task = QuickTask {
            id: self.next_id(),
            title: title.to_string(),
            description,
            is_completed: false,
        };
        self.items.insert(0, task);
        self.items.first()
    }

    /// Replaces the task with `id` by a copy with the flag flipped. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, id: i64) -> bool {
        let Some(index) = self.items.iter().position(|task| task.id == id) else {
            return false;
        };
        let current = &self.items[index];
        let updated = QuickTask {
            is_completed: !current.is_completed,
            ..current.clone()
        };
        self.items[index] = updated;
        true
    }

    // Current time plus a random offset; rapid creation can land on the same millisecond.
    fn next_id(&self) -> i64 {
        let mut rng = rand::thread_rng();
        loop {
            let id = now_millis() + rng.gen_range(0..10_000);
            if !self.items.iter().any(|task| task.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_creation_yields_unique_ids() {
        let mut list = QuickTaskList::new();
        for i in 0..200 {
            list.add(&format!("Task {}", i), None);
        }
        let mut ids: Vec<i64> = list.items().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn toggle_keeps_order() {
        let mut list = QuickTaskList::new();
        list.add("first", None);
        list.add("second", None);
        let first_id = list.items()[1].id;

        assert!(list.toggle_completion(first_id));

        let titles: Vec<&str> = list.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert!(list.items()[1].is_completed);
        assert!(!list.items()[0].is_completed);
    }
}
