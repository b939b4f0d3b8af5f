//! Configuration for the bindata application.
//!
//! Handles parsing command-line arguments and resolving defaults (including
//! a time-based seed for the self-check that is printed so runs can be
//! reproduced).
//!
//! # Inputs
//!
//! Inputs are JSON literals: `20862` is a decimal, `"101"` a binary string,
//! `[1,0,1]` a bit array and `{}` an unsupported shape. A token that is not
//! valid JSON is taken as a plain string, so `0x517E` needs no quoting.

use bindata_core::HexStyle;
use clap::{Parser, Subcommand};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "bindata")]
#[command(about = "Inspect and manipulate word-aligned binary values")]
#[command(version)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Print hex without the 0x prefix
    #[arg(long, global = true)]
    pub bare_hex: bool,

    /// Log each operation (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse one input and print every view
    Show {
        /// JSON literal or plain string
        input: String,
    },

    /// Apply operations left to right, then print every view
    Eval {
        /// JSON literal or plain string
        input: String,

        /// and:<x> or:<x> xor:<x> not set:<pos>=<bit> ladd:<x> radd:<x> shl:<n> shr:<n>
        ops: Vec<String>,
    },

    /// Run the fixed scenarios and a seeded randomized property check
    Selfcheck {
        /// Random seed for determinism (default: time-based)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of generated cases
        #[arg(long, default_value_t = 256)]
        cases: usize,
    },
}

/// Output encoding for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub hex_style: HexStyle,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: &'static str,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            hex_style: if cli.bare_hex {
                HexStyle::Bare
            } else {
                HexStyle::Prefixed
            },
            log_filter: if cli.verbose { "debug" } else { "warn" },
        }
    }
}

/// Use the given seed, or derive one from the clock.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    })
}
