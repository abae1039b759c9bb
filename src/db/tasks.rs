use super::db::Db;
use super::StoreResult;
use crate::libs::live::LiveQuery;
use crate::libs::task::{Task, TaskFilter};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::watch;

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, is_completed, image_path, voice_note_path, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, is_completed = ?5, image_path = ?6, voice_note_path = ?7, created_at = ?8, updated_at = ?9 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, is_completed, image_path, voice_note_path, created_at, updated_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_PENDING: &str = "WHERE is_completed = 0";
const WHERE_COMPLETED: &str = "WHERE is_completed = 1";
const ORDER_BY_DUE_DATE: &str = "ORDER BY due_date ASC, id ASC";
const ORDER_BY_UPDATED: &str = "ORDER BY updated_at DESC, id ASC";

/// Handle to the `tasks` table.
///
/// Cloning is cheap and every clone shares the connection and the change
/// feed, so a clone can be moved onto a blocking thread to perform a write
/// while live queries elsewhere observe the result.
#[derive(Clone)]
pub struct Tasks {
    conn: Arc<Mutex<Connection>>,
    changes: Arc<watch::Sender<u64>>,
}

impl Tasks {
    pub fn new() -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn in_memory() -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::in_memory()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        let (changes, _) = watch::channel(0);
        Tasks {
            conn: Arc::new(Mutex::new(db.conn)),
            changes: Arc::new(changes),
        }
    }

    /// Inserts a task and returns the id storage assigned to it.
    ///
    /// The `id` field of `task` is ignored.
    pub fn insert(&self, task: &Task) -> StoreResult<i64> {
        let id = {
            let conn = self.conn.lock();
            conn.execute(
                INSERT_TASK,
                params![
                    task.title,
                    task.description,
                    task.due_date,
                    task.is_completed,
                    task.image_path,
                    task.voice_note_path,
                    task.created_at,
                    task.updated_at
                ],
            )?;
            conn.last_insert_rowid()
        };
        self.notify();

        Ok(id)
    }

    /// Replaces every column of the row with the same id. Returns the number of rows written.
    pub fn update(&self, task: &Task) -> StoreResult<usize> {
        let affected = self.conn.lock().execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.is_completed,
                task.image_path,
                task.voice_note_path,
                task.created_at,
                task.updated_at
            ],
        )?;
        if affected > 0 {
            self.notify();
        }

        Ok(affected)
    }

    pub fn delete(&self, task: &Task) -> StoreResult<usize> {
        let affected = self.conn.lock().execute(DELETE_TASK, params![task.id])?;
        if affected > 0 {
            self.notify();
        }

        Ok(affected)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        let conn = self.conn.lock();
        let task = conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()?;

        Ok(task)
    }

    /// One-shot read of the tasks selected by `filter`, in display order.
    pub fn fetch(&self, filter: TaskFilter) -> StoreResult<Vec<Task>> {
        let sql = match filter {
            TaskFilter::All => format!("{} {}", SELECT_TASKS, ORDER_BY_DUE_DATE),
            TaskFilter::Pending => format!("{} {} {}", SELECT_TASKS, WHERE_PENDING, ORDER_BY_DUE_DATE),
            TaskFilter::Completed => format!("{} {} {}", SELECT_TASKS, WHERE_COMPLETED, ORDER_BY_UPDATED),
        };

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&sql)?;
        let task_iter = stmt.query_map([], Self::map_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Observable read that re-runs `filter` whenever the table changes.
    pub fn live(&self, filter: TaskFilter) -> StoreResult<LiveQuery> {
        LiveQuery::new(self.clone(), filter)
    }

    /// Receiver on the table's change counter. The current value is marked as seen.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Number of writes that changed at least one row since this handle was opened.
    pub fn version(&self) -> u64 {
        *self.changes.borrow()
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            is_completed: row.get(4)?,
            image_path: row.get(5)?,
            voice_note_path: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}
