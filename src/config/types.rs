//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::driver::{DriverOptions, ErrorPolicy, LineScope};
use crate::filter::FilterOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Transformations applied when no flag is given on the command line
    #[serde(default)]
    pub filter: FilterOptions,
    #[serde(default)]
    pub input: InputConfig,
}

/// How sources are read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// "per-source" restarts numbering for every file, "continuous" does not
    #[serde(default)]
    pub line_scope: LineScope,
    /// "continue" skips unreadable files, "abort" stops at the first one
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Config {
    /// Driver options built from this configuration alone.
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            filter: self.filter,
            line_scope: self.input.line_scope,
            on_error: self.input.on_error,
        }
    }
}
