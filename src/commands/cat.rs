//! Copy handler: runs the driver over the requested sources.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use tracing::debug;

use lcat::cli::Cli;
use lcat::theme::{error_line, stderr_colors_enabled};
use lcat::{CancelToken, Config, Driver, RunReport};

use super::{exit_code_for, should_report, EXIT_FAILURE, EXIT_SUCCESS};

/// Copy every source named on the command line to stdout.
///
/// Returns the process exit status.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, config: &Config) -> Result<i32> {
    let options = cli.driver_options(config);
    let sources = cli.sources();
    debug!(?options, sources = sources.len(), "Starting copy");

    let cancel = CancelToken::new();
    cancel.register_signal_handlers();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = Driver::new(options).run(&sources, &mut out, &cancel);

    let colored = stderr_colors_enabled();
    let mut stderr = io::stderr();
    Ok(report_outcome(result, &mut stderr, colored))
}

/// Print diagnostics for a finished run and pick the exit status.
pub fn report_outcome<W: Write>(
    result: Result<RunReport, lcat::CatError>,
    diagnostics: &mut W,
    colored: bool,
) -> i32 {
    match result {
        Ok(report) => {
            debug!(
                sources_completed = report.sources_completed,
                lines_read = report.lines_read,
                lines_written = report.lines_written,
                failures = report.failures.len(),
                "Copy finished"
            );
            for failure in &report.failures {
                let _ = writeln!(diagnostics, "{}", error_line(&failure.to_string(), colored));
            }
            if report.is_success() {
                EXIT_SUCCESS
            } else {
                EXIT_FAILURE
            }
        }
        Err(err) => {
            if should_report(&err) {
                let _ = writeln!(diagnostics, "{}", error_line(&err.to_string(), colored));
            }
            exit_code_for(&err)
        }
    }
}
