//! Macros for user-facing output.
//!
//! Each macro prints a [`Message`](super::Message) (or anything `Display`)
//! with a status prefix. When debug mode is on the text goes through
//! `tracing` instead, so it interleaves with the structured log on stderr.
//!
//! Debug mode is on when `TASKSYNC_DEBUG` or `RUST_LOG` is set.
//!
//! ```rust
//! use tasksync::{msg_info, msg_success};
//! use tasksync::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(7));
//! msg_info!(Message::NoChangesDetected, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKSYNC_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message as-is; `true` as second argument pads it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Error output goes to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Shown only in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}

#[cfg(test)]
mod tests {
    use crate::libs::messages::Message;

    #[test]
    fn error_macro_carries_message_text() {
        let err = msg_error_anyhow!(Message::InvalidDueDate("someday".to_string()));
        assert_eq!(err.to_string(), "❌ Invalid due date 'someday', expected YYYY-MM-DD");
    }

    #[test]
    fn bail_macro_returns_early() {
        fn fails() -> anyhow::Result<()> {
            msg_bail_anyhow!(Message::ControllerNotStarted);
        }
        assert_eq!(fails().unwrap_err().to_string(), "❌ Task list is not started");
    }

    #[test]
    fn warning_macro_accepts_messages() {
        msg_warning!(Message::ConfigNotFound);
        msg_warning!("plain text");
    }
}

