//! CVH Pick - interactive terminal picker for CVH Linux
//!
//! Ranks candidates (arguments or piped lines) by string similarity to the
//! query as it is typed, and prints the chosen one:
//!
//! ```sh
//! ls | cvh-pick
//! cvh-pick --scorer levenshtein alpha beta gamma
//! ```

use std::{io, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod input;
mod keymap;
mod matcher;
mod rank;
mod session;
mod terminal;
mod ui;

use input::Split;
use matcher::ScorerKind;
use session::Session;

/// CVH Pick - similarity-ranked picker
#[derive(Parser, Debug)]
#[command(name = "cvh-pick")]
#[command(author = "CVH Linux Team")]
#[command(version = "0.1.0")]
#[command(about = "Pick one line from arguments or stdin, ranked by similarity to what you type")]
struct Args {
    /// Candidates; read from stdin when none are given
    candidates: Vec<String>,

    /// Scoring policy
    #[arg(short, long, value_enum, default_value = "jaro")]
    scorer: ScorerKind,

    /// Initial query
    #[arg(short, long, default_value = "")]
    query: String,

    /// Maximum height (lines)
    #[arg(long, default_value = "40")]
    height: u16,

    /// Split stdin on whitespace instead of newlines
    #[arg(short = 'w', long)]
    split_whitespace: bool,

    /// Print selected item with null terminator
    #[arg(long)]
    print0: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> Result<()> {
    let default = if args.verbose {
        "cvh_pick=debug"
    } else {
        "cvh_pick=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match &args.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    debug!("CVH Pick v{}", env!("CARGO_PKG_VERSION"));

    let split = if args.split_whitespace {
        Split::Whitespace
    } else {
        Split::Lines
    };
    let candidates = input::load_candidates(args.candidates, split)?;

    let scorer = args.scorer.build();
    info!("Scoring {} candidates with {}", candidates.len(), scorer.name());

    let session = Session::new(candidates, scorer).with_query(args.query);

    // Terminal is restored before anything is printed
    let selection = terminal::pick(session, args.height)?;

    match selection {
        Some(selected) => {
            info!("Selected: {}", selected);
            terminal::emit(io::stdout().lock(), &selected, args.print0)?;
        }
        None => info!("Cancelled"),
    }

    Ok(())
}
