// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tunnel - Single-lane tunnel traffic simulator

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod output;
mod simulation;
mod traffic;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run};

#[derive(Parser)]
#[command(
    name = "tunnel",
    version,
    about = "Tunnel - Cars and pedestrians sharing a one-lane bridge"
)]
struct Cli {
    /// Log monitor internals (admissions, wakeups, token moves)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a traffic simulation
    Run(run::RunArgs),
    /// Print the simulation config
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::handle(args).await,
        Commands::Config(args) => config::handle(args),
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins unless
/// `--verbose` is given.
fn setup_logging(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
