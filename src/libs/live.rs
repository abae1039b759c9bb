//! Observable task queries.
//!
//! Every write to the `tasks` table bumps a version counter published on a
//! `watch` channel. A [`LiveQuery`] remembers the last version it saw; when
//! the counter moves it replays its query and keeps the new result only if it
//! differs from the one already delivered. [`FilteredTasks`] layers a filter
//! cell on top of the unfiltered live query and recomputes the derived list
//! when either input moves.
//!
//! Both types can be driven synchronously with `refresh` (poll once, cheap
//! when nothing changed) or asynchronously with `changed` (wait for the next
//! delivered value). Dropping a handle detaches it.

use crate::db::tasks::Tasks;
use crate::db::{StoreError, StoreResult};
use crate::libs::task::{Task, TaskFilter};
use tokio::sync::watch;

#[derive(Clone)]
pub struct LiveQuery {
    tasks: Tasks,
    filter: TaskFilter,
    changes: watch::Receiver<u64>,
    current: Vec<Task>,
}

impl LiveQuery {
    pub(crate) fn new(tasks: Tasks, filter: TaskFilter) -> StoreResult<Self> {
        // Subscribe before the first read so a write racing the read is replayed.
        let changes = tasks.subscribe_changes();
        let current = tasks.fetch(filter)?;

        Ok(Self {
            tasks,
            filter,
            changes,
            current,
        })
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// The most recently delivered result.
    pub fn current(&self) -> &[Task] {
        &self.current
    }

    /// Replays the query if the table changed since the last look.
    ///
    /// Returns `true` when the delivered result changed.
    pub fn refresh(&mut self) -> StoreResult<bool> {
        if !self.changes.has_changed().map_err(|_| StoreError::Closed)? {
            return Ok(false);
        }
        self.changes.borrow_and_update();
        self.replay()
    }

    /// Waits until the table changes in a way that alters this query's result.
    pub async fn changed(&mut self) -> StoreResult<()> {
        loop {
            self.changes.changed().await.map_err(|_| StoreError::Closed)?;
            if self.replay()? {
                return Ok(());
            }
        }
    }

    fn replay(&mut self) -> StoreResult<bool> {
        let latest = self.tasks.fetch(self.filter)?;
        if latest == self.current {
            return Ok(false);
        }
        self.current = latest;
        Ok(true)
    }
}

/// The unfiltered task list combined with a filter cell.
pub struct FilteredTasks {
    source: LiveQuery,
    filter: watch::Receiver<TaskFilter>,
    active: TaskFilter,
    current: Vec<Task>,
    recomputations: usize,
}

impl FilteredTasks {
    pub fn new(source: LiveQuery, mut filter: watch::Receiver<TaskFilter>) -> Self {
        let active = *filter.borrow_and_update();
        let current = active.apply(source.current());

        Self {
            source,
            filter,
            active,
            current,
            recomputations: 0,
        }
    }

    pub fn current(&self) -> &[Task] {
        &self.current
    }

    /// The filter the current list was derived with.
    pub fn active_filter(&self) -> TaskFilter {
        self.active
    }

    /// How many times the derived list has been recomputed since creation.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Pulls pending data and filter changes, recomputing only if one moved.
    ///
    /// Returns `true` when the derived list changed.
    pub fn refresh(&mut self) -> StoreResult<bool> {
        let data_changed = self.source.refresh()?;
        let filter_changed = self.filter.has_changed().map_err(|_| StoreError::Closed)?;
        if !data_changed && !filter_changed {
            return Ok(false);
        }

        self.recompute()
    }

    /// Waits until new data or a new filter produces a different derived list.
    pub async fn changed(&mut self) -> StoreResult<()> {
        loop {
            tokio::select! {
                result = self.source.changed() => result?,
                result = self.filter.changed() => {
                    result.map_err(|_| StoreError::Closed)?;
                    self.active = *self.filter.borrow_and_update();
                }
            }
            if self.recompute()? {
                return Ok(());
            }
        }
    }

    // Whichever input woke us, the other may have moved too; both are pulled before deriving.
    fn recompute(&mut self) -> StoreResult<bool> {
        self.source.refresh()?;
        if self.filter.has_changed().map_err(|_| StoreError::Closed)? {
            self.active = *self.filter.borrow_and_update();
        }

        self.recomputations += 1;
        let next = self.active.apply(self.source.current());
        if next == self.current {
            return Ok(false);
        }
        self.current = next;
        Ok(true)
    }
}
