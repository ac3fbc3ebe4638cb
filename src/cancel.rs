//! Cooperative cancellation for the copy loop.
//!
//! The driver polls a [`CancelToken`] between lines. Signals set the flag:
//! - SIGINT (Ctrl+C) via ctrlc handler
//! - SIGHUP (terminal hangup) via signal_hook
//!
//! A blocking read on an interactive terminal only returns once a line is
//! typed, so a second Ctrl+C exits the process right away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status used when the run is interrupted (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Shared cancellation flag.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next line boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Register SIGINT (Ctrl+C) and SIGHUP (terminal hangup) handlers.
    ///
    /// Both set this token's flag. Safe to call multiple times; duplicate
    /// registrations are ignored.
    pub fn register_signal_handlers(&self) {
        let flag = self.cancelled.clone();
        ctrlc::set_handler(move || {
            if flag.swap(true, Ordering::SeqCst) {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        })
        .ok(); // Ignore if handler already set

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            let _ = register(libc::SIGHUP, self.cancelled.clone());
        }
    }
}
