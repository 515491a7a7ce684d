//! Facelet engine command line.
//!
//! Turns scramble notation into 54-character facelet strings, checks
//! facelet strings before they are handed to a solver, and generates
//! random scrambles.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use facelet::moves::format_moves;
use facelet::net::format_net;
use facelet::scramble::{random_scramble, DEFAULT_LENGTH};
use facelet::{apply_scramble, solved_state, validate_state, FaceletState, FaceletTables};

/// Applies scrambles to a 3x3x3 cube and validates facelet strings.
#[derive(Parser)]
#[command(name = "facelet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the solved facelet string.
    Solved,
    /// Apply a scramble and print the resulting facelet string.
    Apply {
        /// Space-separated moves, e.g. "R U R' U'".
        scramble: String,
        /// Start from this facelet string instead of the solved cube.
        #[arg(long)]
        from: Option<String>,
        /// Also print the unfolded net.
        #[arg(long)]
        net: bool,
    },
    /// Check that a facelet string has 54 labels, 6 symbols, 9 of each.
    Validate { state: String },
    /// Generate a random scramble.
    Scramble {
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the facelet string the scramble produces.
        #[arg(long)]
        apply: bool,
    },
    /// Print a facelet string as an unfolded net.
    Net { state: String },
    /// Rebuild the geometric tables and report any inconsistency.
    SelfTest,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solved => println!("{}", solved_state()),
        Command::Apply {
            scramble,
            from,
            net,
        } => run_apply(&scramble, from.as_deref(), net)?,
        Command::Validate { state } => {
            if !run_validate(&state) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Scramble {
            length,
            seed,
            apply,
        } => run_scramble(length, seed, apply)?,
        Command::Net { state } => {
            let state = parse_state(&state)?;
            print!("{}", format_net(&state));
        }
        Command::SelfTest => run_self_test()?,
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_state(text: &str) -> Result<FaceletState> {
    text.parse::<FaceletState>()
        .with_context(|| format!("invalid facelet string {text:?}"))
}

/// Applies a scramble and prints the result.
fn run_apply(scramble: &str, from: Option<&str>, net: bool) -> Result<()> {
    let start = from.map(parse_state).transpose()?;
    let state = apply_scramble(scramble, start.as_ref())
        .with_context(|| format!("invalid scramble {scramble:?}"))?;
    info!(%scramble, "applied scramble");

    println!("{state}");
    if net {
        print!("{}", format_net(&state));
    }
    Ok(())
}

/// Prints the verdict and returns whether the state passed.
fn run_validate(state: &str) -> bool {
    match validate_state(state) {
        Ok(()) => {
            println!("valid");
            true
        }
        Err(e) => {
            eprintln!("invalid: {e}");
            false
        }
    }
}

/// Generates a scramble, optionally applying it.
fn run_scramble(length: usize, seed: Option<u64>, apply: bool) -> Result<()> {
    let moves = match seed {
        Some(seed) => random_scramble(&mut StdRng::seed_from_u64(seed), length),
        None => random_scramble(&mut rand::thread_rng(), length),
    };
    let scramble = format_moves(&moves);
    debug!(length, ?seed, "generated scramble");

    println!("{scramble}");
    if apply {
        let state = apply_scramble(&scramble, None).context("generated scramble did not parse")?;
        println!("{state}");
    }
    Ok(())
}

/// Rebuilds the tables from scratch instead of using the shared copy.
fn run_self_test() -> Result<()> {
    let tables = FaceletTables::build().context("facelet tables failed their checks")?;
    info!(slots = tables.keys().len(), "facelet tables consistent");
    println!("ok");
    Ok(())
}
