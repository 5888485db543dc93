//! Tower of Hanoi Solver
//!
//! Solves the 3-peg puzzle recursively and iteratively and the 4-peg puzzle
//! with the Frame–Stewart algorithm, compares the solvers, and checks
//! player-supplied move sequences.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hanoi::config::AppConfig;
use hanoi::report::{compare, SolveReport};
use hanoi::solver::{frame_stewart_move_count, three_peg_move_count};
use hanoi::validator::{check_move_count, hint, is_solved, replay};
use hanoi::{parse_sequence, Algorithm, ConfigError, HanoiError, Move, Peg, PegState};

/// Solves Tower of Hanoi puzzles and validates move sequences.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults are used if it does not exist).
    #[arg(long, global = true, default_value = "hanoi.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the move sequence produced by one algorithm.
    Solve {
        #[arg(short, long)]
        disks: Option<usize>,
        #[arg(short, long, value_enum, default_value_t = Algorithm::Recursive)]
        algorithm: Algorithm,
        /// Print a JSON summary instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Run every algorithm suited to the board and compare them.
    Compare {
        #[arg(short, long)]
        disks: Option<usize>,
        #[arg(short, long)]
        pegs: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Replay a comma-separated sequence such as "A->C,A->B" and check it.
    Verify {
        sequence: String,
        #[arg(short, long)]
        disks: Option<usize>,
        #[arg(short, long)]
        pegs: Option<usize>,
        /// Peg that must end up holding every disk (defaults to the last peg).
        #[arg(short, long)]
        target: Option<Peg>,
        /// Number of moves the sequence is declared to contain.
        #[arg(short, long)]
        moves: Option<usize>,
    },
    /// Suggest the next optimal move after the moves played so far.
    Hint {
        /// Moves played so far, e.g. "A->C,A->B".
        #[arg(default_value = "")]
        played: String,
        #[arg(short, long)]
        disks: Option<usize>,
        #[arg(short, long)]
        pegs: Option<usize>,
    },
    /// Show minimum move counts for 3 and 4 pegs.
    Counts {
        #[arg(long, default_value_t = 10)]
        up_to: usize,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Hanoi(#[from] HanoiError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Some(Command::Solve {
            disks,
            algorithm,
            json,
        }) => run_solve(&config, disks, algorithm, json),
        Some(Command::Compare { disks, pegs, json }) => run_compare(&config, disks, pegs, json),
        Some(Command::Verify {
            sequence,
            disks,
            pegs,
            target,
            moves,
        }) => run_verify(&config, &sequence, disks, pegs, target, moves),
        Some(Command::Hint {
            played,
            disks,
            pegs,
        }) => run_hint(&config, &played, disks, pegs),
        Some(Command::Counts { up_to }) => {
            config.check_disks(up_to)?;
            print!("{}", format_counts(up_to));
            Ok(())
        }
        // default: compare on the configured board
        None => run_compare(&config, None, None, false),
    }
}

/// Solves with one algorithm and prints the wire-form sequence.
fn run_solve(
    config: &AppConfig,
    disks: Option<usize>,
    algorithm: Algorithm,
    json: bool,
) -> Result<(), CliError> {
    let disks = disks.unwrap_or(config.default_disks);
    config.check_disks(disks)?;

    let report = algorithm.run_timed(disks)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        let summary = report.summary();
        println!("{} moves: {}", summary.move_count, summary.sequence);
    }
    Ok(())
}

/// Runs all suitable algorithms and prints their move counts and timings.
fn run_compare(
    config: &AppConfig,
    disks: Option<usize>,
    pegs: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let disks = disks.unwrap_or(config.default_disks);
    let pegs = pegs.unwrap_or(config.default_pegs);
    config.check_disks(disks)?;
    if !(3..=4).contains(&pegs) {
        return Err(HanoiError::PegCount(pegs).into());
    }

    let reports = compare(disks, pegs)?;
    if json {
        let summaries: Vec<_> = reports.iter().map(SolveReport::summary).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", format_comparison(disks, pegs, &reports));
    }
    Ok(())
}

fn format_comparison(disks: usize, pegs: usize, reports: &[SolveReport]) -> String {
    let mut output = format!("{disks} disks, {pegs} pegs\n");
    for report in reports {
        output.push_str(&format!(
            "{:<24}{:>8} moves  {:.6}s\n",
            report.algorithm.solver().name(),
            report.moves.len(),
            report.elapsed.as_secs_f64()
        ));
    }
    output
}

/// Replays a player sequence from the initial board and reports the outcome.
fn run_verify(
    config: &AppConfig,
    sequence: &str,
    disks: Option<usize>,
    pegs: Option<usize>,
    target: Option<Peg>,
    declared: Option<usize>,
) -> Result<(), CliError> {
    let disks = disks.unwrap_or(config.default_disks);
    config.check_disks(disks)?;
    let moves = parse_sequence(sequence)?;
    if let Some(expected) = declared {
        check_move_count(expected, &moves)?;
    }

    let mut state = PegState::new(disks, pegs.unwrap_or(config.default_pegs))?;
    let target = match target {
        Some(peg) if state.contains(peg) => peg,
        Some(peg) => return Err(HanoiError::UnknownPeg(peg.to_string()).into()),
        None => last_peg(&state)?,
    };

    let outcome = replay(&mut state, &moves);
    print!("{state}");
    outcome?;

    if is_solved(&state, state.disk_count(), target) {
        println!("Solved in {} moves", moves.len());
        Ok(())
    } else {
        Err(HanoiError::Unsolved { target }.into())
    }
}

fn last_peg(state: &PegState) -> Result<Peg, HanoiError> {
    state
        .pegs()
        .last()
        .copied()
        .ok_or(HanoiError::PegCount(0))
}

/// Prints the board after `played` and the next move of the optimal solution.
fn run_hint(
    config: &AppConfig,
    played: &str,
    disks: Option<usize>,
    pegs: Option<usize>,
) -> Result<(), CliError> {
    let (state, next) = next_hint(config, played, disks, pegs)?;
    print!("{state}");
    match next {
        Some(mv) => println!(
            "Hint: try moving from {} to {}",
            mv.source, mv.destination
        ),
        None => println!("You've already made more moves than the optimal solution"),
    }
    Ok(())
}

/// Replays `played` and looks up the optimal move at that position.
fn next_hint(
    config: &AppConfig,
    played: &str,
    disks: Option<usize>,
    pegs: Option<usize>,
) -> Result<(PegState, Option<Move>), CliError> {
    let disks = disks.unwrap_or(config.default_disks);
    config.check_disks(disks)?;
    let moves = parse_sequence(played)?;

    let mut state = PegState::new(disks, pegs.unwrap_or(config.default_pegs))?;
    replay(&mut state, &moves)?;

    let optimal = Algorithm::optimal_for(state.pegs().len())
        .solver()
        .solve(state.disk_count())?;
    Ok((state, hint(&optimal, moves.len())))
}

/// Table of 3-peg and Frame–Stewart 4-peg move counts.
fn format_counts(up_to: usize) -> String {
    let mut output = String::from("disks   3 pegs   4 pegs\n");
    for disks in 0..=up_to {
        output.push_str(&format!(
            "{:>5}{:>9}{:>9}\n",
            disks,
            three_peg_move_count(disks),
            frame_stewart_move_count(disks)
        ));
    }
    output
}
