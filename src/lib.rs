//! # TaskSync
//!
//! A to-do list manager: tasks persisted in SQLite, shown through live
//! All/Pending/Completed views, plus a quick task list that only lives for
//! the current session.
//!
//! ## Features
//!
//! - **Task Storage**: Title, description, due date, completion, attachments
//! - **Live Views**: Lists follow table changes without re-querying on filter switch
//! - **Quick Tasks**: Session-only notes with a lightweight form
//! - **Interactive Session**: Terminal screen with filter tabs and task actions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasksync::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
