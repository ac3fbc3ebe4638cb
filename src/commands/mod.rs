//! Command handlers for the lcat CLI.
//!
//! Each submodule handles one mode of the binary. The dispatch logic remains
//! in main.rs.

pub mod cat;
pub mod completions;
pub mod config;

use lcat::cancel::INTERRUPTED_EXIT_CODE;
use lcat::CatError;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when any input or output failed.
pub const EXIT_FAILURE: i32 = 1;

/// Map a run-stopping error to the process exit status.
pub fn exit_code_for(err: &CatError) -> i32 {
    match err {
        CatError::Cancelled => INTERRUPTED_EXIT_CODE,
        _ => EXIT_FAILURE,
    }
}

/// Whether an error deserves a line on stderr.
///
/// Interruptions and a closed downstream pipe end the run quietly.
pub fn should_report(err: &CatError) -> bool {
    !matches!(err, CatError::Cancelled) && !err.is_broken_pipe()
}
