//! lcat library
//!
//! A `cat`-style line filter: copies input streams to an output while
//! optionally trimming trailing whitespace, squeezing blank runs, numbering
//! lines, showing tabs and marking line ends.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod source;
pub mod theme;

pub use cancel::CancelToken;
pub use config::Config;
pub use driver::{copy_stream, Driver, DriverOptions, ErrorPolicy, LineScope, RunReport, StreamStats};
pub use error::CatError;
pub use filter::{transform_bytes, transform_line, BlankRun, FilterOptions, LineFilter};
pub use source::Source;
