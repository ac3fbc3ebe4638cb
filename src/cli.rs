//! CLI definitions for lcat
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use clap_complete::Shell as CompletionShell;

use crate::config::Config;
use crate::driver::{DriverOptions, ErrorPolicy, LineScope};
use crate::filter::FilterOptions;
use crate::source::Source;

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, flag names
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "lcat")]
#[command(about = "Concatenate files to standard output, with optional line transformations")]
#[command(
    long_about = "lcat - concatenate files to standard output.

Each FILE is copied line by line. With no FILE, or when FILE is -, standard
input is read. Optional transformations are applied to every line in a fixed
order: trim, squeeze, number, show tabs, show ends.

Line numbers count input lines, so lines dropped by --squeeze-blank leave gaps
in the numbering. By default numbering restarts for every FILE; use
--continuous to treat all inputs as one stream.

Defaults for every flag can be set in ~/.config/lcat/config.toml.

EXAMPLES:
    lcat notes.txt                 Copy a file to standard output
    lcat -n a.txt b.txt            Number lines of each file
    lcat -ns --continuous *.log    Number across files, squeeze blank runs
    lcat -A script.sh              Show tabs as ^I and line ends as $
    some-cmd | lcat -r -           Trim trailing whitespace from a pipe"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Files to copy; `-` reads standard input
    #[arg(value_name = "FILE", help = "Files to copy (- or none reads standard input)")]
    pub files: Vec<String>,

    /// Number all output lines
    #[arg(short = 'n', long = "number", help = "Number lines by their input position")]
    pub number: bool,

    /// Display $ at end of each line
    #[arg(short = 'E', long, help = "Display $ at the end of each line")]
    pub show_ends: bool,

    /// Display TAB characters as ^I
    #[arg(short = 'T', long, help = "Display TAB characters as ^I")]
    pub show_tabs: bool,

    /// Equivalent to -ET
    #[arg(short = 'A', long, help = "Equivalent to -ET")]
    pub show_all: bool,

    /// Suppress repeated empty output lines
    #[arg(short = 's', long, help = "Suppress repeated empty output lines")]
    pub squeeze_blank: bool,

    /// Remove trailing spaces and tabs
    #[arg(short = 'r', long, help = "Remove trailing spaces and tabs from each line")]
    pub trim_trailing: bool,

    /// Number and squeeze across all files as one stream
    #[arg(
        short = 'c',
        long,
        help = "Treat all files as one stream for numbering and squeezing"
    )]
    pub continuous: bool,

    /// Stop at the first file that cannot be read
    #[arg(long, help = "Stop at the first file that cannot be read")]
    pub fail_fast: bool,

    /// Ignore ~/.config/lcat/config.toml
    #[arg(long, help = "Ignore the configuration file")]
    pub no_config: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, help = "Print the effective configuration and exit")]
    pub show_config: bool,

    /// Write the effective configuration to ~/.config/lcat/config.toml and exit
    #[arg(
        long,
        conflicts_with = "no_config",
        help = "Save the effective configuration as the config file and exit"
    )]
    pub init_config: bool,

    /// Generate shell completions (internal use)
    #[arg(long, value_enum, value_name = "SHELL", hide = true)]
    pub completions: Option<CompletionShell>,
}

impl Cli {
    /// Transformations requested on the command line.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            trim_trailing_spaces: self.trim_trailing,
            number_lines: self.number,
            show_ends: self.show_ends || self.show_all,
            show_tabs: self.show_tabs || self.show_all,
            squeeze_blank: self.squeeze_blank,
        }
    }

    /// Merge command-line flags over the configured defaults.
    ///
    /// Flags can only switch behavior on; the config file decides the rest.
    pub fn driver_options(&self, config: &Config) -> DriverOptions {
        let base = config.driver_options();
        DriverOptions {
            filter: base.filter.union(self.filter_options()),
            line_scope: if self.continuous {
                LineScope::Continuous
            } else {
                base.line_scope
            },
            on_error: if self.fail_fast {
                ErrorPolicy::Abort
            } else {
                base.on_error
            },
        }
    }

    /// The effective configuration: config defaults with flags applied.
    pub fn effective_config(&self, config: &Config) -> Config {
        let options = self.driver_options(config);
        let mut effective = config.clone();
        effective.filter = options.filter;
        effective.input.line_scope = options.line_scope;
        effective.input.on_error = options.on_error;
        effective
    }

    pub fn sources(&self) -> Vec<Source> {
        Source::from_args(self.files.as_slice())
    }
}
