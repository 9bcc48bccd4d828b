// SPDX-License-Identifier: MIT
//
// taleweave: resolve chat themes from the command line.
//
// This is the binary that wires the two library crates together:
//
//   tw-color → hex parsing, HSL, relative luminance
//   tw-theme → palette registry, editions, readability guard, resolver
//
// The chat client calls the resolver directly; this front-end exists to
// browse palettes, preview editions and debug why a text color was
// overridden. Each invocation flows through:
//
//   args → logging → registry (builtin or --palettes FILE) → subcommand → stdout

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tw_theme::Registry;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_inspect, run_palettes, run_resolve};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("taleweave: failed to initialize logging: {e}");
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("taleweave: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Palettes { json } => run_palettes(&load_registry(cli)?, *json, &mut out)?,
        Command::Resolve(args) => run_resolve(&load_registry(cli)?, args, &mut out)?,
        Command::Inspect(args) => run_inspect(args, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn load_registry(cli: &Cli) -> Result<Registry> {
    match &cli.palettes {
        Some(path) => Registry::from_file(path)
            .with_context(|| format!("failed to load palettes from {}", path.display())),
        None => Ok(Registry::builtin().clone()),
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        // An explicit -v/-q overrides RUST_LOG.
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        ..LogConfig::default()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
