//! Per-line transformation pipeline.
//!
//! Every input line goes through the same fixed sequence of steps, each one
//! enabled by a flag in [`FilterOptions`]:
//!
//! 1. trim trailing spaces and tabs
//! 2. squeeze repeated blank lines (may drop the line)
//! 3. prefix the input line number
//! 4. render tabs as `^I`
//! 5. append `$`
//!
//! Numbering happens before tab rendering so the separator tab it inserts is
//! rendered too. The squeeze check runs after trimming so whitespace-only lines
//! count as blank.
//!
//! # Example
//!
//! ```
//! use lcat::filter::{FilterOptions, LineFilter};
//!
//! let options = FilterOptions {
//!     number_lines: true,
//!     squeeze_blank: true,
//!     ..FilterOptions::default()
//! };
//! let mut filter = LineFilter::new(options);
//!
//! let out: Vec<_> = ["a", "", "", "b"]
//!     .iter()
//!     .filter_map(|line| filter.feed(line))
//!     .collect();
//!
//! // The third input line is dropped but still consumes its number
//! assert_eq!(out, vec!["     1\ta", "     2\t", "     4\tb"]);
//! ```

use serde::{Deserialize, Serialize};

/// Width of the right-justified line number field.
pub const NUMBER_WIDTH: usize = 6;

/// The five independent line transformations.
///
/// All flags default to `false`, which makes the filter a verbatim copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Strip trailing ASCII spaces and tabs
    #[serde(default)]
    pub trim_trailing_spaces: bool,
    /// Prefix each line with its input line number
    #[serde(default)]
    pub number_lines: bool,
    /// Append `$` to each line
    #[serde(default)]
    pub show_ends: bool,
    /// Render tabs as `^I`
    #[serde(default)]
    pub show_tabs: bool,
    /// Emit only the first line of each run of blank lines
    #[serde(default)]
    pub squeeze_blank: bool,
}

impl FilterOptions {
    /// Combine two option sets; a flag is on if either side has it on.
    pub fn union(self, other: FilterOptions) -> FilterOptions {
        FilterOptions {
            trim_trailing_spaces: self.trim_trailing_spaces || other.trim_trailing_spaces,
            number_lines: self.number_lines || other.number_lines,
            show_ends: self.show_ends || other.show_ends,
            show_tabs: self.show_tabs || other.show_tabs,
            squeeze_blank: self.squeeze_blank || other.squeeze_blank,
        }
    }

    /// True when no transformation is enabled.
    pub fn is_passthrough(&self) -> bool {
        *self == FilterOptions::default()
    }
}

/// Blank-run tracking for one input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankRun {
    last_was_blank: bool,
}

impl BlankRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the most recent line seen by the squeeze step was blank.
    pub fn last_was_blank(&self) -> bool {
        self.last_was_blank
    }
}

/// Transform a single input line.
///
/// Returns `None` when the line is suppressed by blank squeezing. The
/// `line_number` is the 1-based index of the line in its input stream and is
/// used as-is for numbering, so suppressed lines leave gaps.
pub fn transform_line(
    line_number: u64,
    line: &str,
    state: &mut BlankRun,
    options: &FilterOptions,
) -> Option<String> {
    // Only ASCII is ever removed or inserted, so valid UTF-8 stays valid
    transform_bytes(line_number, line.as_bytes(), state, options)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Byte-level [`transform_line`].
///
/// Every step only looks at or inserts ASCII, so bytes that are not valid
/// UTF-8 pass through untouched.
pub fn transform_bytes(
    line_number: u64,
    line: &[u8],
    state: &mut BlankRun,
    options: &FilterOptions,
) -> Option<Vec<u8>> {
    let line = if options.trim_trailing_spaces {
        trim_trailing(line)
    } else {
        line
    };

    if options.squeeze_blank {
        if line.is_empty() {
            if state.last_was_blank {
                return None;
            }
            state.last_was_blank = true;
        } else {
            state.last_was_blank = false;
        }
    }

    let mut out = Vec::with_capacity(line.len() + NUMBER_WIDTH + 2);
    if options.number_lines {
        out.extend_from_slice(
            format!("{:>width$}\t", line_number, width = NUMBER_WIDTH).as_bytes(),
        );
    }
    out.extend_from_slice(line);

    if options.show_tabs && out.contains(&b'\t') {
        out = render_tabs(&out);
    }

    if options.show_ends {
        out.push(b'$');
    }

    Some(out)
}

fn trim_trailing(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| *b != b' ' && *b != b'\t')
        .map_or(0, |i| i + 1);
    &line[..end]
}

fn render_tabs(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + 4);
    for &b in line {
        if b == b'\t' {
            out.extend_from_slice(b"^I");
        } else {
            out.push(b);
        }
    }
    out
}

/// A [`transform_line`] driver for one logical stream.
///
/// Owns the options, the blank-run state and the input line counter. The
/// counter advances on every [`feed`](Self::feed), including lines that end up
/// suppressed.
#[derive(Debug, Clone)]
pub struct LineFilter {
    options: FilterOptions,
    state: BlankRun,
    next_line: u64,
}

impl LineFilter {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            state: BlankRun::new(),
            next_line: 1,
        }
    }

    /// Number of input lines fed since the last reset.
    pub fn lines_seen(&self) -> u64 {
        self.next_line - 1
    }

    /// Start a new stream: numbering restarts at 1 and the blank run is cleared.
    pub fn reset(&mut self) {
        self.state = BlankRun::new();
        self.next_line = 1;
    }

    /// Feed the next input line, returning the line to emit if any.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        let line_number = self.advance();
        transform_line(line_number, line, &mut self.state, &self.options)
    }

    /// Byte-level [`feed`](Self::feed) for input that may not be UTF-8.
    pub fn feed_bytes(&mut self, line: &[u8]) -> Option<Vec<u8>> {
        let line_number = self.advance();
        transform_bytes(line_number, line, &mut self.state, &self.options)
    }

    fn advance(&mut self) -> u64 {
        let line_number = self.next_line;
        self.next_line += 1;
        line_number
    }
}
