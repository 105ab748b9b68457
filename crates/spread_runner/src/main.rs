//! Batch spread guesser.
//!
//! Reads a JSON array of server observations and prints one guessed spread
//! per entry as a JSON array.
//!
//! Usage:
//!   cargo run -p spread_runner -- --input observations.json
//!   cat observations.json | cargo run -p spread_runner
//!   cargo run -p spread_runner -- --input observations.json --pretty

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use spread_engine::{
    guess_server_spread_traced, Gen9, GuessConfig, NoTrace, ServerObservation, SpreadGuess,
};

#[derive(Parser)]
#[command(name = "spread_runner")]
struct Cli {
    /// Observations file (JSON array); reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Override the legal EV cap (default: SPREAD_MAX_LEGAL_EVS or 508)
    #[arg(long)]
    max_legal_evs: Option<u16>,
}

#[derive(Serialize)]
struct Output {
    ident: Option<String>,
    /// `None` when the observation failed its preconditions
    guess: Option<SpreadGuess>,
}

fn read_observations(input: Option<&PathBuf>) -> Result<Vec<ServerObservation>> {
    let raw = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut raw = String::new();
            BufReader::new(file)
                .read_to_string(&mut raw)
                .with_context(|| format!("read {}", path.display()))?;
            raw
        }
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("read stdin")?;
            raw
        }
    };

    serde_json::from_str(&raw).context("parse observations JSON")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GuessConfig::from_env();
    if let Some(cap) = cli.max_legal_evs {
        config.max_legal_evs = cap;
    }

    let observations = read_observations(cli.input.as_ref())?;

    let outputs: Vec<Output> = observations
        .iter()
        .map(|obs| Output {
            ident: obs.ident.clone(),
            guess: guess_server_spread_traced(Gen9, obs, &config, &mut NoTrace),
        })
        .collect();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outputs)?
    } else {
        serde_json::to_string(&outputs)?
    };
    println!("{json}");

    Ok(())
}
