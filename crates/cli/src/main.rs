// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, ranks poker hands and prints the winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

mod showdown;

#[derive(Debug, Parser)]
#[clap(about = "Ranks poker hands and prints the winning hand.")]
struct Cli {
    /// The hands to rank, each a list of card tokens like "TD TC TH 7C 7D".
    #[clap(required = true)]
    hands: Vec<String>,
    /// Print all the hands tied for the win.
    #[clap(long, short)]
    ties: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = showdown::Config {
        hands: cli.hands,
        ties: cli.ties,
    };

    let mut stdout = std::io::stdout().lock();
    showdown::run(&config, &mut stdout)
}
