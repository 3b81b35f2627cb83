// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use itsrs::Cli;

fn main() {
    let cli = Cli::parse();
    itsrs::init_logging(cli.verbose);
    if let Err(e) = itsrs::run(cli.command, cli.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
