//! Stream driver: feeds input lines through a [`LineFilter`] and writes the
//! emitted lines to the output.
//!
//! The driver owns the decisions the line filter does not make:
//! - where lines come from and where they go
//! - whether numbering and blank-run state span each source or the whole run
//!   ([`LineScope`])
//! - what happens when one source cannot be read ([`ErrorPolicy`])
//! - when to stop on cancellation (checked before every line)

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cancel::CancelToken;
use crate::error::CatError;
use crate::filter::{FilterOptions, LineFilter};
use crate::source::Source;

/// How far line numbering and blank-run state reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineScope {
    /// Every source starts at line 1 with a fresh blank run
    #[default]
    PerSource,
    /// All sources form one concatenated stream
    Continuous,
}

/// What to do when a source cannot be opened or read.
///
/// Write failures and cancellation always stop the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Report the failure and move on to the next source
    #[default]
    Continue,
    /// Stop at the first failed source
    Abort,
}

/// Everything the driver needs to know about a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverOptions {
    pub filter: FilterOptions,
    pub line_scope: LineScope,
    pub on_error: ErrorPolicy,
}

/// Line counts for a single source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub lines_read: u64,
    pub lines_written: u64,
}

/// Outcome of a run that was not aborted.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Sources copied to the end
    pub sources_completed: usize,
    pub lines_read: u64,
    pub lines_written: u64,
    /// Sources skipped under [`ErrorPolicy::Continue`]
    pub failures: Vec<CatError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, stats: StreamStats) {
        self.sources_completed += 1;
        self.lines_read += stats.lines_read;
        self.lines_written += stats.lines_written;
    }
}

/// Copies sources to an output through the line filter.
#[derive(Debug, Clone)]
pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    /// Copy every source, in order, to `out`.
    ///
    /// Returns `Err` when the run stops early: a write failure, cancellation,
    /// or a source failure under [`ErrorPolicy::Abort`]. Otherwise the report
    /// lists any sources that were skipped.
    pub fn run<W: Write>(
        &self,
        sources: &[Source],
        out: &mut W,
        cancel: &CancelToken,
    ) -> Result<RunReport, CatError> {
        self.run_with(sources, Source::open, out, cancel)
    }

    /// Like [`run`](Self::run) with a custom way of opening sources.
    pub fn run_with<W, F>(
        &self,
        sources: &[Source],
        mut open: F,
        out: &mut W,
        cancel: &CancelToken,
    ) -> Result<RunReport, CatError>
    where
        W: Write,
        F: FnMut(&Source) -> Result<Box<dyn BufRead>, CatError>,
    {
        let mut report = RunReport::default();
        let mut filter = LineFilter::new(self.options.filter);

        for source in sources {
            if cancel.is_cancelled() {
                return Err(CatError::Cancelled);
            }
            if self.options.line_scope == LineScope::PerSource {
                filter.reset();
            }

            let name = source.display_name();
            debug!(source = %name, "Copying source");

            let result = open(source)
                .and_then(|reader| copy_stream(&name, reader, &mut *out, &mut filter, cancel));

            // Whatever made it out before a failure stays written
            let flushed = out.flush().map_err(CatError::Write);
            if let Err(CatError::Cancelled) = result {
                return Err(CatError::Cancelled);
            }
            flushed?;

            match result {
                Ok(stats) => {
                    debug!(
                        source = %name,
                        lines_read = stats.lines_read,
                        lines_written = stats.lines_written,
                        "Finished source"
                    );
                    report.record(stats);
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => match self.options.on_error {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::Continue => {
                        warn!(source = %name, error = %err, "Skipping source");
                        report.failures.push(err);
                    }
                },
            }
        }

        Ok(report)
    }
}

/// Copy one stream through `filter`.
///
/// Lines end at `\n`; a `\r` right before it is dropped too. A last line with
/// no terminator still counts. Line contents are copied as raw bytes, so
/// input that is not UTF-8 comes out unchanged. Every emitted line ends with
/// `\n` on every platform.
pub fn copy_stream<R: BufRead, W: Write>(
    name: &str,
    mut reader: R,
    out: &mut W,
    filter: &mut LineFilter,
    cancel: &CancelToken,
) -> Result<StreamStats, CatError> {
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(CatError::Cancelled);
        }

        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| CatError::Read {
                name: name.to_string(),
                source,
            })?;
        if read == 0 {
            break;
        }
        stats.lines_read += 1;

        match filter.feed_bytes(strip_terminator(&buf)) {
            Some(line) => {
                out.write_all(&line)
                    .and_then(|_| out.write_all(b"\n"))
                    .map_err(CatError::Write)?;
                stats.lines_written += 1;
            }
            None => trace!(source = name, line = filter.lines_seen(), "Squeezed blank line"),
        }
    }

    Ok(stats)
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_terminator(buf: &[u8]) -> &[u8] {
    match buf {
        [rest @ .., b'\r', b'\n'] => rest,
        [rest @ .., b'\n'] => rest,
        _ => buf,
    }
}
