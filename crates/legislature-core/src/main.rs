//! Legislature Simulation
//!
//! Seats a randomly generated legislature, then holds sessions until the
//! requested count is reached or the operator quits.
//!
//! Run with: cargo run --bin legislature_sim -- --seed 7 --sessions 25

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use legislature_core::config::Config;
use legislature_core::events::SessionLogger;
use legislature_core::output::{
    render_roster, render_session, write_stats, ConsoleSink, DisplaySink, StatsCollector,
};
use legislature_core::{build_legislature, BillNamer, SetupError, SimRng};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "legislature_sim")]
#[command(about = "An agent-based legislature simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of sessions to hold without pausing (interactive when omitted)
    #[arg(long)]
    sessions: Option<u64>,

    /// Number of legislators (overrides the tuning file)
    #[arg(long)]
    seats: Option<usize>,

    /// Number of parties (overrides the tuning file)
    #[arg(long)]
    parties: Option<usize>,

    /// Tuning file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Adjective word list for bill names
    #[arg(long)]
    adjectives: Option<PathBuf>,

    /// Noun word list for bill names
    #[arg(long)]
    nouns: Option<PathBuf>,

    /// Write every session as a JSON line to this file
    #[arg(long)]
    session_log: Option<PathBuf>,

    /// Write a JSON statistics summary to this file at the end
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Do not poll the advocate again after their automatic aye
    #[arg(long)]
    exclude_advocate: bool,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] legislature_core::config::ConfigError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("console output failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("legislature_core=info,legislature_sim=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), RunError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };
    apply_overrides(&mut config, &args);

    info!(
        seed = args.seed,
        seats = config.simulation.seats,
        parties = config.simulation.parties,
        recount_advocate = config.voting.recount_advocate,
        "Legislature simulation starting"
    );

    // Everything that can fail at setup is checked before the first session
    let namer = BillNamer::from_paths(
        config.words.adjectives.as_deref(),
        config.words.nouns.as_deref(),
    )?;
    let mut rng = SimRng::seed_from_u64(args.seed);
    let mut legislature = build_legislature(&config.simulation, config.voting, &mut rng)?;

    let mut sink = ConsoleSink::stdout();
    render_roster(&legislature, &mut sink)?;
    sink.end_line()?;

    let mut logger = match &args.session_log {
        Some(path) => SessionLogger::new(path).unwrap_or_else(|e| {
            warn!("Could not open session log {}: {}", path.display(), e);
            SessionLogger::null()
        }),
        None => SessionLogger::null(),
    };
    let mut collector = StatsCollector::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if let Some(limit) = args.sessions {
            if legislature.stats().proposed >= limit {
                break;
            }
        } else if !wait_for_operator(&mut input)? {
            break;
        }

        let record = legislature.hold_session(&mut rng, &namer);
        render_session(&record, &legislature.stats(), &mut sink)?;
        sink.end_line()?;

        if let Err(e) = logger.log(&record) {
            warn!("Could not write session {} to log: {}", record.session, e);
        }
        collector.record(&record, &legislature);
    }

    let stats = legislature.stats();
    info!(
        proposed = stats.proposed,
        passed = stats.passed,
        failed = stats.failed,
        logged = logger.record_count(),
        "Simulation complete"
    );

    if let Some(path) = &args.stats_out {
        let summary = collector.generate_summary(stats, legislature.parties());
        match write_stats(path, &summary) {
            Ok(()) => info!("Wrote statistics to {}", path.display()),
            Err(e) => warn!("Could not write statistics to {}: {}", path.display(), e),
        }
    }

    Ok(())
}

/// CLI flags take precedence over the tuning file
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(seats) = args.seats {
        config.simulation.seats = seats;
    }
    if let Some(parties) = args.parties {
        config.simulation.parties = parties;
    }
    if args.adjectives.is_some() {
        config.words.adjectives = args.adjectives.clone();
    }
    if args.nouns.is_some() {
        config.words.nouns = args.nouns.clone();
    }
    if args.exclude_advocate {
        config.voting.recount_advocate = false;
    }
}

/// Block for a line of input. Returns false on EOF or "q"/"quit".
fn wait_for_operator(input: &mut impl BufRead) -> io::Result<bool> {
    print!("Press Enter to hold a session (q to quit) ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let command = line.trim();
    Ok(!(command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit")))
}
