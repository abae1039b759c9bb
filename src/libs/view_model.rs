//! View-model for the task list.
//!
//! Holds the three live collections (all, pending, completed) opened once at
//! construction and the current filter cell. The list shown to the user is
//! derived from the unfiltered collection and the filter, so switching the
//! filter never re-queries storage.
//!
//! Writes are fire-and-forget: each one runs on the blocking pool and its
//! result only becomes visible through the live collections. Failures are
//! logged and dropped.

use crate::db::StoreResult;
use crate::libs::live::{FilteredTasks, LiveQuery};
use crate::libs::repository::TaskRepository;
use crate::libs::task::{Task, TaskFilter};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Number of tasks behind each filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn for_filter(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Pending => self.pending,
            TaskFilter::Completed => self.completed,
        }
    }
}

pub struct TaskViewModel {
    repository: TaskRepository,
    all_tasks: LiveQuery,
    pending_tasks: LiveQuery,
    completed_tasks: LiveQuery,
    filter: watch::Sender<TaskFilter>,
    writes: JoinSet<()>,
}

impl TaskViewModel {
    pub fn new(repository: TaskRepository) -> StoreResult<Self> {
        let all_tasks = repository.get_all_tasks()?;
        let pending_tasks = repository.get_pending_tasks()?;
        let completed_tasks = repository.get_completed_tasks()?;
        let (filter, _) = watch::channel(TaskFilter::default());

        Ok(Self {
            repository,
            all_tasks,
            pending_tasks,
            completed_tasks,
            filter,
            writes: JoinSet::new(),
        })
    }

    pub fn repository(&self) -> &TaskRepository {
        &self.repository
    }

    /// A detached handle on the unfiltered collection, up to date as of this call.
    pub fn all_tasks(&mut self) -> StoreResult<LiveQuery> {
        self.all_tasks.refresh()?;
        Ok(self.all_tasks.clone())
    }

    pub fn pending_tasks(&mut self) -> StoreResult<LiveQuery> {
        self.pending_tasks.refresh()?;
        Ok(self.pending_tasks.clone())
    }

    pub fn completed_tasks(&mut self) -> StoreResult<LiveQuery> {
        self.completed_tasks.refresh()?;
        Ok(self.completed_tasks.clone())
    }

    pub fn task_counts(&mut self) -> StoreResult<TaskCounts> {
        self.all_tasks.refresh()?;
        self.pending_tasks.refresh()?;
        self.completed_tasks.refresh()?;

        Ok(TaskCounts {
            all: self.all_tasks.current().len(),
            pending: self.pending_tasks.current().len(),
            completed: self.completed_tasks.current().len(),
        })
    }

    pub fn filter(&self) -> TaskFilter {
        *self.filter.borrow()
    }

    /// Sets the current filter. Subscribers are notified only if the value changed.
    pub fn set_filter(&self, filter: TaskFilter) -> bool {
        self.filter.send_if_modified(|current| {
            if *current == filter {
                return false;
            }
            *current = filter;
            true
        })
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<TaskFilter> {
        self.filter.subscribe()
    }

    /// The unfiltered collection combined with the filter cell.
    pub fn filtered_tasks(&mut self) -> StoreResult<FilteredTasks> {
        let source = self.all_tasks()?;
        Ok(FilteredTasks::new(source, self.subscribe_filter()))
    }

    pub fn insert_task(&mut self, task: Task) {
        self.dispatch("insert", move |repository| repository.insert_task(&task).map(|id| debug!(id, "task inserted")));
    }

    pub fn update_task(&mut self, task: Task) {
        self.dispatch("update", move |repository| repository.update_task(&task).map(drop));
    }

    pub fn delete_task(&mut self, task: Task) {
        self.dispatch("delete", move |repository| repository.delete_task(&task).map(drop));
    }

    pub fn toggle_task_completion(&mut self, task: Task) {
        self.dispatch("toggle", move |repository| repository.toggle_task_completion(&task).map(drop));
    }

    /// Writes dispatched but not yet reaped.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Waits for every dispatched write to finish.
    pub async fn wait_idle(&mut self) {
        while let Some(result) = self.writes.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    warn!(error = %e, "task write panicked");
                }
            }
        }
    }

    /// Drops writes that have not started yet. Writes already running finish on their own.
    pub fn cancel_pending_writes(&mut self) {
        if !self.writes.is_empty() {
            debug!(count = self.writes.len(), "cancelling pending task writes");
        }
        self.writes.abort_all();
        self.writes.detach_all();
    }

    fn dispatch<F>(&mut self, operation: &'static str, write: F)
    where
        F: FnOnce(&TaskRepository) -> StoreResult<()> + Send + 'static,
    {
        while self.writes.try_join_next().is_some() {}

        let repository = self.repository.clone();
        self.writes.spawn_blocking(move || {
            if let Err(e) = write(&repository) {
                warn!(operation, error = %e, "task write failed");
            }
        });
    }
}
