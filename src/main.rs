//! Eight-Puzzle Solver
//!
//! Solves the 3x3 sliding puzzle between a start and a goal arrangement with
//! breadth-first, bidirectional breadth-first or heuristic iterative-deepening
//! search, and prints every path found as a sequence of grids.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eight_puzzle::path::format_paths;
use eight_puzzle::{AdmissionPolicy, Board, SearchOutcome, Strategy};

/// Finds slide sequences between two 3x3 puzzle arrangements.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start arrangement, nine slots with `_`, `.` or `0` for the blank.
    #[arg(long, default_value = "2 8 3 1 _ 4 7 6 5")]
    start: Board,

    /// Goal arrangement, in the same format as `--start`.
    #[arg(long, default_value = "1 6 2 _ 3 4 8 7 5")]
    goal: Board,

    /// Threshold or beam width for the iterative-deepening strategies.
    #[arg(long, default_value_t = 10)]
    limit: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Breadth-first search from the start.
    Bfs,
    /// Breadth-first search from both ends.
    Bidirectional,
    /// Iterative deepening admitting candidates below a heuristic threshold.
    IdaThreshold,
    /// Iterative deepening admitting the best `limit` candidates per round.
    IdaBest,
    /// Run every strategy in turn.
    All,
}

impl Command {
    fn strategies(self, limit: u32) -> Vec<Strategy> {
        let threshold = Strategy::IterativeDeepening(AdmissionPolicy::from_flag(true, limit));
        let best = Strategy::IterativeDeepening(AdmissionPolicy::from_flag(false, limit));
        match self {
            Command::Bfs => vec![Strategy::BreadthFirst],
            Command::Bidirectional => vec![Strategy::Bidirectional],
            Command::IdaThreshold => vec![threshold],
            Command::IdaBest => vec![best],
            Command::All => vec![
                Strategy::BreadthFirst,
                Strategy::Bidirectional,
                threshold,
                best,
            ],
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::All);
    let mut failed = false;

    println!("Start:\n{}\n\nGoal:\n{}\n", cli.start, cli.goal);
    for strategy in command.strategies(cli.limit) {
        let started = Instant::now();
        match strategy.solve(&cli.start, &cli.goal) {
            Ok(outcome) => {
                print!("{}", render_outcome(&strategy, &outcome));
                println!("Elapsed: {:.3?}\n", started.elapsed());
            }
            Err(e) => {
                eprintln!("{}: {}", strategy.name(), e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Installs the log subscriber; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eight_puzzle=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Formats one strategy's result: a summary line followed by every path.
fn render_outcome(strategy: &Strategy, outcome: &SearchOutcome) -> String {
    let mut output = format!(
        "{}: {} path(s), {} boards explored\n\n",
        strategy.name(),
        outcome.paths.len(),
        outcome.explored
    );
    output.push_str(&format_paths(&outcome.paths));
    output
}
