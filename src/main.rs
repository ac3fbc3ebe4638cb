//! lcat - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use lcat::cli::Cli;
use lcat::theme::{error_line, stderr_colors_enabled};
use lcat::Config;

use commands::EXIT_FAILURE;

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!(
                "{}",
                error_line(&format!("{:#}", err), stderr_colors_enabled())
            );
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    if let Some(shell) = cli.completions {
        commands::completions::handle::<Cli>(shell)?;
        return Ok(commands::EXIT_SUCCESS);
    }

    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load()?
    };

    if cli.show_config {
        commands::config::handle_show(cli, &config)?;
        return Ok(commands::EXIT_SUCCESS);
    }

    if cli.init_config {
        commands::config::handle_init(cli, &config)?;
        return Ok(commands::EXIT_SUCCESS);
    }

    commands::cat::handle(cli, &config)
}
