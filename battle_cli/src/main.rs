//! Turn-based text battle against a dragon.
//!
//! Pick a Wizard, Elf or Human from the menu, then watch the fixed-damage
//! exchange play out until one side falls.

mod app;
mod cli;
mod logging;

use anyhow::{Context, Result};
use battle_core::Roster;
use clap::Parser;
use cli::Cli;
use std::io;

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let roster = match &cli.roster {
        Some(path) => Roster::load_from_path(path)
            .with_context(|| format!("load roster {}", path.display()))?,
        None => Roster::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let report = app::play(&mut input, &mut output, &roster)?;

    if let (Some(report), true) = (report, cli.summary) {
        app::write_summary(&mut output, &report)?;
    }

    Ok(())
}
