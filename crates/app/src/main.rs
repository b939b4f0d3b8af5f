//! bindata: inspect and manipulate word-aligned binary values from the command line.

mod config;
mod json;
mod ops;
mod render;
mod sample_gen;
mod selfcheck;

use std::process::ExitCode;

use anyhow::Context;
use bindata_core::{BinaryValue, Input};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Cli, Command, Config, OutputFormat};
use ops::Op;
use render::Report;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    init_tracing(config.log_filter);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Show { input } => {
            let value = load(json::parse_literal(&input));
            emit(&value, config)?;
            Ok(exit_for(&value))
        }
        Command::Eval { input, ops } => {
            let ops = ops
                .iter()
                .map(|token| token.parse::<Op>())
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut value = load(json::parse_literal(&input));
            for op in &ops {
                op.apply(&mut value)
                    .with_context(|| format!("applying {} to {}", op, value))?;
                debug!(op = %op, result = %value, "applied");
            }

            emit(&value, config)?;
            Ok(exit_for(&value))
        }
        Command::Selfcheck { seed, cases } => {
            let seed = config::resolve_seed(seed);
            info!(seed, cases, "running self-check");
            let stats = selfcheck::run(seed, cases);

            match config.output {
                OutputFormat::Text => stats.print_summary(),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            }

            Ok(if stats.succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Assign `input`, reporting a rejection instead of failing outright.
fn load(input: Input) -> BinaryValue {
    let mut value = BinaryValue::default();
    if let Err(err) = value.assign(input) {
        warn!(raw = %value.raw(), error = %err, "input rejected");
    }
    value
}

fn emit(value: &BinaryValue, config: &Config) -> anyhow::Result<()> {
    let report = Report::from_value(value, config.hex_style);
    match config.output {
        OutputFormat::Text => report.print(),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn exit_for(value: &BinaryValue) -> ExitCode {
    if value.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
