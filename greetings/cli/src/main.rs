use std::process::ExitCode;

use clap::Parser;
use greetings_lib::{DEFAULT_NAMES, DuplicatePolicy, Greeter, GreetingError, Greetings};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print a greeting for each name.
///
/// Examples:
///   hello                        # Greet Laura, Alejandro and Soledad
///   hello Ana Luis               # Greet the given names
///   hello --seed 7 Ana           # Reproducible greeting
///   hello --reject-duplicates Ana Ana
#[derive(Debug, Parser)]
#[command(name = "hello")]
#[command(version)]
#[command(about = "Print a greeting for each name", long_about = None)]
struct Cli {
    /// Fail instead of replacing the greeting when a name repeats.
    #[arg(long)]
    reject_duplicates: bool,

    /// Seed the random generator for reproducible greetings.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Enable DEBUG-level logging.
    #[arg(long)]
    debug: bool,

    /// Names to greet (defaults to Laura, Alejandro and Soledad).
    #[arg(value_name = "NAMES")]
    names: Vec<String>,
}

#[derive(Debug, Error)]
enum HelloError {
    #[error(transparent)]
    Greeting(#[from] GreetingError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(greetings) => {
            println!("{greetings:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("greetings: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tracing::instrument(skip(cli))]
fn run(cli: &Cli) -> Result<Greetings, HelloError> {
    let names = names_to_greet(cli);
    let policy = duplicate_policy(cli);
    info!(count = names.len(), ?policy, "greeting names");

    let greetings = match cli.seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            Greeter::seeded(seed).with_duplicate_policy(policy).hellos(&names)?
        }
        None => Greeter::new().with_duplicate_policy(policy).hellos(&names)?,
    };

    Ok(greetings)
}

fn names_to_greet(cli: &Cli) -> Vec<String> {
    if cli.names.is_empty() {
        DEFAULT_NAMES.iter().map(|name| name.to_string()).collect()
    } else {
        cli.names.clone()
    }
}

fn duplicate_policy(cli: &Cli) -> DuplicatePolicy {
    if cli.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Overwrite
    }
}
