//! List adapters backing the two lists of the task screen.
//!
//! An adapter holds the rows currently shown and counts how often it was
//! handed a new list, which is what a renderer redraws on.

use crate::libs::quick_tasks::QuickTask;
use crate::libs::task::Task;

#[derive(Debug, Clone)]
pub struct ListAdapter<T> {
    items: Vec<T>,
    submissions: usize,
}

pub type TaskAdapter = ListAdapter<Task>;
pub type QuickTaskAdapter = ListAdapter<QuickTask>;

impl<T> Default for ListAdapter<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            submissions: 0,
        }
    }
}

impl<T: PartialEq> ListAdapter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed rows. Returns `true` if the contents differ from before.
    pub fn submit_list(&mut self, items: Vec<T>) -> bool {
        self.submissions += 1;
        let changed = self.items != items;
        self.items = items;
        changed
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of lists submitted so far.
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}
