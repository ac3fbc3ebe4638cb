//! Test helper utilities

#![allow(dead_code)]

use lcat::{CancelToken, LineFilter};
use lcat::FilterOptions;

/// All five transformations switched on.
pub fn all_options() -> FilterOptions {
    FilterOptions {
        trim_trailing_spaces: true,
        number_lines: true,
        show_ends: true,
        show_tabs: true,
        squeeze_blank: true,
    }
}

/// Run `input` through a fresh filter and return what it writes.
pub fn filter_text(input: &str, options: FilterOptions) -> String {
    String::from_utf8(filter_bytes(input.as_bytes(), options)).expect("filter output is UTF-8")
}

/// Byte-level [`filter_text`].
pub fn filter_bytes(input: &[u8], options: FilterOptions) -> Vec<u8> {
    let mut out = Vec::new();
    let mut filter = LineFilter::new(options);
    lcat::copy_stream("test", input, &mut out, &mut filter, &CancelToken::new())
        .expect("in-memory copy cannot fail");
    out
}
