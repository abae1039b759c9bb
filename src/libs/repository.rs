//! Task repository.
//!
//! Forwards every call to [`Tasks`] unchanged. The one derived operation is
//! [`TaskRepository::toggle_task_completion`], a read-modify-write over the
//! record the caller already holds.

use crate::db::tasks::Tasks;
use crate::db::StoreResult;
use crate::libs::live::LiveQuery;
use crate::libs::task::{now_millis, Task, TaskFilter};
use tracing::debug;

#[derive(Clone)]
pub struct TaskRepository {
    tasks: Tasks,
}

impl TaskRepository {
    pub fn new(tasks: Tasks) -> Self {
        Self { tasks }
    }

    /// Live query for any filter; the three getters below are its fixed forms.
    pub fn tasks(&self, filter: TaskFilter) -> StoreResult<LiveQuery> {
        self.tasks.live(filter)
    }

    pub fn get_all_tasks(&self) -> StoreResult<LiveQuery> {
        self.tasks.live(TaskFilter::All)
    }

    pub fn get_pending_tasks(&self) -> StoreResult<LiveQuery> {
        self.tasks.live(TaskFilter::Pending)
    }

    pub fn get_completed_tasks(&self) -> StoreResult<LiveQuery> {
        self.tasks.live(TaskFilter::Completed)
    }

    pub fn get_task_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        self.tasks.get_by_id(id)
    }

    pub fn insert_task(&self, task: &Task) -> StoreResult<i64> {
        self.tasks.insert(task)
    }

    pub fn update_task(&self, task: &Task) -> StoreResult<usize> {
        self.tasks.update(task)
    }

    pub fn delete_task(&self, task: &Task) -> StoreResult<usize> {
        self.tasks.delete(task)
    }

    /// Flips the completion flag of `task`, stamps `updated_at` and writes the copy.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn toggle_task_completion(&self, task: &Task) -> StoreResult<Task> {
        let updated_task = Task {
            is_completed: !task.is_completed,
            updated_at: now_millis().max(task.updated_at),
            ..task.clone()
        };
        self.tasks.update(&updated_task)?;
        debug!(id = ?updated_task.id, completed = updated_task.is_completed, "toggled task completion");

        Ok(updated_task)
    }
}
