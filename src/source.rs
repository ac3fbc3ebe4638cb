//! Input sources: standard input or named files.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::CatError;

/// Argument that selects standard input.
pub const STDIN_ARG: &str = "-";

/// One input to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Parse a command-line argument. `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Build the source list for a set of arguments.
    ///
    /// An empty argument list reads standard input once.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Vec<Source> {
        if args.is_empty() {
            return vec![Source::Stdin];
        }
        args.iter().map(|a| Source::from_arg(a.as_ref())).collect()
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => "standard input".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }

    /// Open the source for buffered line reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, CatError> {
        match self {
            Source::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Source::File(path) => {
                // Opening a directory succeeds on unix; reading it does not
                if path.is_dir() {
                    return Err(CatError::Open {
                        path: path.clone(),
                        source: io::Error::new(io::ErrorKind::Other, "Is a directory"),
                    });
                }
                let file = File::open(path).map_err(|source| CatError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "{}", STDIN_ARG),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
