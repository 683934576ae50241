use std::io;

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod shell;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut shell = shell::Shell::new(io::stdin().lock(), io::stdout().lock(), cli.format);
    commands::run_session(&cli, &mut shell)
}
