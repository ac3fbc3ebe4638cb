//! Configuration handlers: `--show-config` and `--init-config`.

use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;

use lcat::cli::Cli;
use lcat::config::docs::annotate_config;
use lcat::Config;

/// Print the effective configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(cli: &Cli, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_show(cli, config, &mut out)
}

/// Save the effective configuration to the config file.
///
/// Refuses to overwrite an existing file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(cli: &Cli, config: &Config) -> Result<()> {
    let config_path = Config::config_path()?;
    init_at(cli, config, &config_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Wrote {}", config_path.display())?;
    out.flush()?;
    Ok(())
}

pub(crate) fn write_show<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    out.write_all(render_effective(cli, config)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Effective configuration rendered as annotated TOML.
pub(crate) fn render_effective(cli: &Cli, config: &Config) -> Result<String> {
    let effective = cli.effective_config(config);
    let toml_str = toml::to_string_pretty(&effective)?;
    Ok(annotate_config(&toml_str))
}

pub(crate) fn init_at(cli: &Cli, config: &Config, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "Config file already exists: {}\nHint: edit it directly or remove it first.",
            config_path.display()
        );
    }
    cli.effective_config(config).save_to(config_path)
}
