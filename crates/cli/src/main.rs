// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand classifier CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::io;

use holdem_eval::classify_hand;

pub mod input;
use input::Format;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards, for example `A♠ KD`.
    #[clap(long, num_args = 2, value_name = "CARD", required_unless_present = "stdin")]
    hole: Vec<String>,
    /// The five community cards.
    #[clap(long, short, num_args = 5, value_name = "CARD", required_unless_present = "stdin")]
    board: Vec<String>,
    /// Read one hand per line from stdin, the hole cards first.
    #[clap(long, conflicts_with_all = ["hole", "board"])]
    stdin: bool,
    /// Print the classification as JSON.
    #[clap(long, short)]
    json: bool,
    /// Log rejected hands and matched rules.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let format = if cli.json { Format::Json } else { Format::Text };
    let mut stdout = io::stdout().lock();

    if cli.stdin {
        input::classify_lines(io::stdin().lock(), &mut stdout, format)
    } else {
        let classification = classify_hand(&cli.hole, &cli.board)?;
        input::write_classification(&mut stdout, &classification, format)
    }
}
