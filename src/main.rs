//! CFOP Cube Solver
//!
//! Scrambles a 3x3x3 cube, solves it with the CFOP method and prints each
//! solving step with the net of the cube before and after.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use cfop::{
    CubeError, CubeState, FaceletString, ScrambleHistory, Scrambler, Session, Solver,
    DEFAULT_SCRAMBLE_LENGTH,
};

/// Scrambles and solves a 3x3x3 cube with the CFOP method.
#[derive(Parser)]
#[command(name = "cfop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a random scramble and the resulting cube.
    Scramble {
        /// Number of moves.
        #[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve a given or random scramble.
    Solve {
        /// Moves to scramble with; random when omitted.
        #[arg(long)]
        scramble: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
    },
    /// Apply moves to a solved cube and print it.
    Apply {
        /// Whitespace-separated moves, e.g. "R U R' U'".
        moves: String,
    },
    /// Solve many random scrambles and report any failure.
    Verify {
        /// Number of scrambles.
        #[arg(short, long, default_value_t = 100)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
    },
    /// Print the facelet string of a solved cube after the given moves.
    Facelets {
        moves: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Command::Scramble { length, seed }) => {
            run_scramble(length, seed);
            Ok(())
        }
        Some(Command::Solve {
            scramble,
            seed,
            length,
        }) => run_solve(scramble.as_deref(), seed, length),
        Some(Command::Apply { moves }) => run_apply(&moves),
        Some(Command::Verify {
            count,
            seed,
            length,
        }) => {
            return run_verify(count, seed, length);
        }
        Some(Command::Facelets { moves }) => run_facelets(&moves),
        None => run_solve(None, None, DEFAULT_SCRAMBLE_LENGTH),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn scrambler(seed: Option<u64>) -> Scrambler {
    match seed {
        Some(seed) => Scrambler::with_seed(seed),
        None => Scrambler::new(),
    }
}

/// Prints a random scramble and the cube it produces.
fn run_scramble(length: usize, seed: Option<u64>) {
    let mut history = ScrambleHistory::new();
    let state = scrambler(seed).scramble(CubeState::solved(), length, &mut history);
    println!("{history}\n");
    println!("{state}");
}

/// Scrambles a cube, solves it and plays the solution back.
fn run_solve(scramble: Option<&str>, seed: Option<u64>, length: usize) -> Result<(), CubeError> {
    let mut session = Session::new(scrambler(seed), Solver::default());
    match scramble {
        Some(moves) => session.apply(moves)?,
        None => {
            session.scramble(length);
        }
    }
    println!("Scramble: {}\n", session.history());
    println!("{}\n", session.state());

    let start = Instant::now();
    let solution = session.solve();
    let elapsed = start.elapsed();

    println!("{solution}\n");
    session.apply_solution(&solution);
    session.record_solve(elapsed, solution.move_count());
    println!("{}\n", session.state());

    if session.state().is_solved() {
        println!("Solved in {elapsed:.2?}");
    } else {
        println!("Cube is NOT solved");
    }
    Ok(())
}

fn run_apply(moves: &str) -> Result<(), CubeError> {
    let state = CubeState::solved().apply_sequence(moves)?;
    println!("{state}");
    Ok(())
}

fn run_facelets(moves: &str) -> Result<(), CubeError> {
    let state = CubeState::solved().apply_sequence(moves)?;
    println!("{}", FaceletString::from(&state));
    Ok(())
}

/// Runs `count` scramble-then-solve rounds, printing every failure with its
/// scramble so it can be replayed.
fn run_verify(count: usize, seed: Option<u64>, length: usize) -> ExitCode {
    let mut session = Session::new(scrambler(seed), Solver::default());
    let mut failures = 0;

    for round in 0..count {
        session.reset();
        let scrambled = *session.scramble(length);
        let scramble = session.history().to_string();

        let start = Instant::now();
        let solution = session.solve();
        let elapsed = start.elapsed();

        session.apply_solution(&solution);
        if session.state().is_solved() && solution.defects.is_empty() {
            session.record_solve(elapsed, solution.move_count());
            continue;
        }

        failures += 1;
        println!("Round {} failed", round + 1);
        println!("  scramble: {scramble}");
        println!("  facelets: {}", FaceletString::from(&scrambled));
        for defect in &solution.defects {
            println!("  {defect}");
        }
    }

    println!("{} of {count} solved\n", count - failures);
    print!("{}", session.summary());

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
