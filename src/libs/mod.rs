//! Core library modules for the tasksync application.
//!
//! Layering, leaf first: the `tasks` table in [`crate::db`], the
//! [`repository`], the [`view_model`] with its filter cell, and the list
//! [`controller`] that owns the adapters and the session's quick tasks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasksync::db::tasks::Tasks;
//! use tasksync::libs::repository::TaskRepository;
//! use tasksync::libs::task::Task;
//!
//! let repository = TaskRepository::new(Tasks::new()?);
//! let id = repository.insert_task(&Task::new("Buy milk", "2025-03-01"))?;
//! # Ok::<(), tasksync::db::StoreError>(())
//! ```

pub mod adapter;
pub mod config;
pub mod controller;
pub mod data_storage;
pub mod formatter;
pub mod live;
pub mod logging;
pub mod messages;
pub mod quick_tasks;
pub mod repository;
pub mod task;
pub mod view;
pub mod view_model;
