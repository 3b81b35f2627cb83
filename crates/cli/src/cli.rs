// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  its rules                          Show the configured rules
  its extract -p 'bug (\\d+)' msg.txt  Show issue ids found in a commit message
  its dispatch event.json            Run the rules for an event without a tracker
  its validate -P tools -r refs/heads/main msg.txt
                                     Check a commit message against the policy";

#[derive(Parser)]
#[command(name = "its")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check issue-tracker rules and policies for code review events")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Site configuration file (default: $ITS_CONFIG, then <config dir>/its/its.toml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless ITS_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the rules the engine would load
    Rules {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show the issue ids of a commit message and where they occur
    #[command(after_help = "Examples:\n  \
        its extract -p '(?i)bug[ #]?(\\d+)' msg.txt   Use an explicit pattern\n  \
        git log -1 --format=%B | its extract -P tools   Use the project's pattern")]
    Extract {
        /// Issue pattern (regular expression)
        #[arg(long, short, conflicts_with = "project")]
        pattern: Option<String>,

        /// Capture group holding the issue id
        #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
        group: i64,

        /// Take the pattern from this project's configuration
        #[arg(long, short = 'P')]
        project: Option<String>,

        /// Commit message file ('-' or omitted for stdin)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Run the rules for an event, printing tracker calls instead of making them
    Dispatch {
        /// Event JSON file ('-' or omitted for stdin)
        file: Option<PathBuf>,
    },

    /// Check a commit message against the project's association policy
    Validate {
        /// Project receiving the commit
        #[arg(long, short = 'P')]
        project: String,

        /// Target ref, e.g. refs/heads/main
        #[arg(long = "ref", short, value_name = "REF")]
        ref_name: String,

        /// Commit id shown in messages
        #[arg(long, default_value = "0000000000000000000000000000000000000000")]
        commit: String,

        /// Issue ids the tracker should report as non-existing
        #[arg(long, value_delimiter = ',')]
        missing: Vec<String>,

        /// Commit message file ('-' or omitted for stdin)
        file: Option<PathBuf>,
    },
}
