//! Database layer for the tasksync application.
//!
//! A single SQLite table holds the persisted tasks. Every write bumps a
//! change counter so live queries can replay themselves after the table moves.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasksync::db::tasks::Tasks;
//! use tasksync::libs::task::{Task, TaskFilter};
//!
//! let tasks = Tasks::new()?;
//! tasks.insert(&Task::new("Review code", "2025-03-01"))?;
//! let pending = tasks.fetch(TaskFilter::Pending)?;
//! # Ok::<(), tasksync::db::StoreError>(())
//! ```

use thiserror::Error;

/// Connection setup and schema initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The `tasks` table and its live queries.
pub mod tasks;

/// Failures surfaced by the storage layer.
///
/// These are propagated unchanged through the repository; nothing below the
/// view-model catches them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("data directory error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("task change feed closed")]
    Closed,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
