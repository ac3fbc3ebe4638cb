//! Stream processing errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while copying input sources to the output.
///
/// The line filter itself never fails; every variant comes from I/O around it
/// or from a cancellation request.
#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("write error: {0}")]
    Write(#[source] io::Error),

    #[error("interrupted")]
    Cancelled,
}

impl CatError {
    /// True when the downstream reader went away (e.g. `lcat file | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CatError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Whether this error must stop the whole run regardless of error policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CatError::Write(_) | CatError::Cancelled)
    }
}
