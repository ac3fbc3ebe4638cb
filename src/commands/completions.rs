//! Completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Write a shell completion script for `C` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_completions::<C, _>(shell, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Generate a shell completion script into `out`.
pub(crate) fn write_completions<C: CommandFactory, W: Write>(
    shell: CompletionShell,
    out: &mut W,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, lcat::theme::PROGRAM, out);
    Ok(())
}
