//! Tracing subscriber setup for the binary.
//!
//! `RUST_LOG` wins when set. Otherwise `TASKSYNC_DEBUG` turns on `debug` for
//! this crate, and the default is `warn`.

use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let default_level = if std::env::var("TASKSYNC_DEBUG").is_ok() { "warn,tasksync=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
}
