//! Boggle Solver CLI
//!
//! Builds a grid, loads a word list and prints every word found on the grid.

use anyhow::{bail, Context, Result};
use boggle_solver::{
    load_word_list, Adjacency, Board, Dictionary, Solver, SolverConfig, VisitPolicy,
};
use clap::Parser;
use crossbeam_channel::{RecvTimeoutError, Sender};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "boggle-solver")]
#[command(about = "Find every dictionary word hidden in a Boggle grid")]
#[command(version)]
struct Args {
    /// Size of the random grid
    #[arg(long, default_value = "8")]
    size: usize,

    /// Literal grid, rows separated by '/' (e.g. "cat/dog/pie")
    #[arg(long, conflicts_with_all = ["demo", "rng_seed", "size"])]
    grid: Option<String>,

    /// Use the fixed "the quick brown fox" 8x8 grid
    #[arg(long, conflicts_with_all = ["rng_seed", "size"])]
    demo: bool,

    /// Seed for the random grid, for reproducible runs
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Word list, one word per line
    #[arg(long, short, env = "BOGGLE_DICTIONARY", default_value = "words.txt")]
    dictionary: PathBuf,

    /// Shortest word kept from the word list
    #[arg(long, default_value_t = boggle_solver::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Maximum word length
    #[arg(long, default_value_t = boggle_solver::solver::DEFAULT_PLY)]
    ply: usize,

    /// Spread seeds over a worker pool
    #[arg(long)]
    parallel: bool,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long, short = 'j')]
    workers: Option<usize>,

    /// Seconds to wait for the workers before giving up
    #[arg(long, default_value = "10")]
    timeout: f64,

    /// Seeds handed to a worker per job
    #[arg(long, default_value_t = boggle_solver::solver::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Release visited cells when a branch returns, considering every simple path
    #[arg(long)]
    backtrack: bool,

    /// Let words wrap around the grid edges
    #[arg(long)]
    wrap: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Status line on stderr while a solve runs. Dropping it clears the line.
struct Progress {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Progress {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    const TICK: Duration = Duration::from_millis(100);

    fn start(label: String) -> Self {
        let (stop, stopped) = crossbeam_channel::bounded::<()>(0);
        let handle = thread::spawn(move || {
            let start = Instant::now();
            let mut width = 0;
            for frame in Self::FRAMES.iter().cycle() {
                let line = format!("{} {} {:.1}s", frame, label, start.elapsed().as_secs_f64());
                width = width.max(line.chars().count());
                let mut stderr = io::stderr();
                let _ = write!(stderr, "\r{}", line);
                let _ = stderr.flush();
                // Ends on a stop message or when the sender is dropped
                if !matches!(stopped.recv_timeout(Self::TICK), Err(RecvTimeoutError::Timeout)) {
                    break;
                }
            }
            let mut stderr = io::stderr();
            let _ = write!(stderr, "\r{:width$}\r", "", width = width);
            let _ = stderr.flush();
        });
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("boggle_solver={}", level))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build_board(args: &Args) -> Result<Board> {
    let board = if let Some(grid) = &args.grid {
        Board::parse(grid).context("invalid --grid")?
    } else if args.demo {
        Board::demo()
    } else {
        let mut rng = match args.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Board::random(args.size, &mut rng).context("invalid --size")?
    };

    let adjacency = if args.wrap {
        Adjacency::Wrapping
    } else {
        Adjacency::Clipped
    };
    Ok(board.with_adjacency(adjacency))
}

fn build_config(args: &Args) -> Result<SolverConfig> {
    let timeout = Duration::try_from_secs_f64(args.timeout)
        .with_context(|| format!("invalid --timeout {}", args.timeout))?;
    let policy = if args.backtrack {
        VisitPolicy::Backtracking
    } else {
        VisitPolicy::Retained
    };

    let mut config = SolverConfig::default()
        .with_ply(args.ply)
        .with_parallel(args.parallel)
        .with_timeout(timeout)
        .with_chunk_size(args.chunk_size)
        .with_policy(policy);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let board = build_board(&args)?;

    let words = load_word_list(&args.dictionary)
        .with_context(|| format!("failed to read word list {}", args.dictionary.display()))?;
    let dictionary = Dictionary::build(&words, args.min_length);
    if dictionary.is_empty() {
        bail!(
            "no words of at least {} letters in {}",
            args.min_length,
            args.dictionary.display()
        );
    }
    tracing::info!(words = dictionary.len(), "dictionary ready");

    print!("{}", board);
    println!();

    let size = board.size();
    let ply = config.ply;
    let solver = Solver::new(board, dictionary, config);

    let progress = (args.verbose == 0 && io::stderr().is_terminal()).then(|| {
        let config = solver.config();
        let label = if config.parallel {
            format!("solving {} seeds on {} workers", size * size, config.workers)
        } else {
            format!("solving {} seeds", size * size)
        };
        Progress::start(label)
    });
    let start = Instant::now();
    let result = solver.solve(None);
    let elapsed = start.elapsed();
    drop(progress);
    let found = result?;

    println!("{}", "=".repeat(40));
    println!(
        "{} words with max {} letters found in a {}x{} grid after {:.2?}:",
        found.len(),
        ply,
        size,
        size,
        elapsed
    );
    println!();
    let list: Vec<&str> = found.iter().map(String::as_str).collect();
    println!("    {}", list.join(","));
    println!("{}", "=".repeat(40));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_conflicts_with_fixed_grids() {
        assert!(Args::try_parse_from(["boggle-solver", "--demo", "--size", "5"]).is_err());
        assert!(Args::try_parse_from(["boggle-solver", "--grid", "ab/cd", "--size", "5"]).is_err());
        assert!(Args::try_parse_from(["boggle-solver", "--size", "5", "--rng-seed", "7"]).is_ok());
    }

    #[test]
    fn test_default_size_does_not_conflict() {
        let args = Args::try_parse_from(["boggle-solver", "--demo"]).unwrap();
        assert!(args.demo);
        assert_eq!(args.size, 8);
    }

    #[test]
    fn test_progress_stops_on_drop() {
        let progress = Progress::start("solving 1 seeds".to_string());
        drop(progress);
    }
}
