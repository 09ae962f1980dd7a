//! Runs the seed search over many cells and merges the results.
//!
//! Seeds are explored either one after another or as batches spawned on a
//! dedicated rayon pool. Board and dictionary are shared behind `Arc` and only
//! read; each batch builds its own visited sets and word buffers.

use crate::board::{Board, Cell};
use crate::dictionary::WordIndex;
use crate::error::{Result, SolveError};
use crate::search::{explore, ResultSet, VisitPolicy};
use crossbeam_channel::RecvTimeoutError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default maximum word length.
pub const DEFAULT_PLY: usize = 64;

/// Default time the parallel solve waits for its workers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of seeds handed to a worker in one job.
pub const DEFAULT_CHUNK_SIZE: usize = 4;

/// Settings for a solve.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum word length
    pub ply: usize,
    /// Run seeds on a worker pool instead of the calling thread
    pub parallel: bool,
    /// Worker threads in the pool
    pub workers: usize,
    /// How long the parallel solve waits before giving up. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Seeds per pool job
    pub chunk_size: usize,
    pub policy: VisitPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            ply: DEFAULT_PLY,
            parallel: false,
            workers: rayon::current_num_threads(),
            timeout: Some(DEFAULT_TIMEOUT),
            chunk_size: DEFAULT_CHUNK_SIZE,
            policy: VisitPolicy::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_ply(mut self, ply: usize) -> Self {
        self.ply = ply;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_policy(mut self, policy: VisitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject settings that would make a solve meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.ply == 0 {
            return Err(SolveError::config("ply must be at least 1"));
        }
        if self.workers == 0 {
            return Err(SolveError::config("worker count must be at least 1"));
        }
        if self.chunk_size == 0 {
            return Err(SolveError::config("chunk size must be at least 1"));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(SolveError::config("timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// A board and dictionary ready to be searched.
#[derive(Debug)]
pub struct Solver<D> {
    board: Arc<Board>,
    dictionary: Arc<D>,
    config: SolverConfig,
}

impl<D: WordIndex> Solver<D> {
    pub fn new(board: Board, dictionary: D, config: SolverConfig) -> Self {
        Self::from_shared(Arc::new(board), Arc::new(dictionary), config)
    }

    pub fn from_shared(board: Arc<Board>, dictionary: Arc<D>, config: SolverConfig) -> Self {
        Self {
            board,
            dictionary,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Explore each seed in turn on the calling thread.
    pub fn solve_sequential(&self, seeds: &[Cell]) -> Result<ResultSet> {
        self.check(seeds)?;
        let start = Instant::now();

        // Each seed is its own batch here, so a failure names the seed's index
        let mut words = ResultSet::new();
        for (batch, seed) in seeds.iter().enumerate() {
            let found = run_batch(
                &self.board,
                &*self.dictionary,
                std::slice::from_ref(seed),
                self.config.ply,
                self.config.policy,
            )
            .map_err(|cause| SolveError::WorkerFailure { batch, cause })?;
            words.extend(found);
        }

        tracing::info!(
            seeds = seeds.len(),
            words = words.len(),
            elapsed = ?start.elapsed(),
            "sequential solve finished"
        );
        Ok(words)
    }

    fn check(&self, seeds: &[Cell]) -> Result<()> {
        self.config.validate()?;
        if self.dictionary.is_empty() {
            return Err(SolveError::config("dictionary is empty"));
        }
        if let Some(seed) = seeds.iter().find(|seed| !self.board.contains(**seed)) {
            let n = self.board.size();
            return Err(SolveError::config(format!(
                "seed {} is outside the {}x{} board",
                seed, n, n
            )));
        }
        Ok(())
    }
}

impl<D: WordIndex + Send + Sync + 'static> Solver<D> {
    /// Solve from `seeds`, or from every cell when `None`.
    pub fn solve(&self, seeds: Option<&[Cell]>) -> Result<ResultSet> {
        let all;
        let seeds = match seeds {
            Some(seeds) => seeds,
            None => {
                all = self.board.cells();
                &all
            }
        };

        if self.config.parallel {
            self.solve_parallel(seeds)
        } else {
            self.solve_sequential(seeds)
        }
    }

    /// Explore seeds in batches on a pool of `config.workers` threads.
    ///
    /// Either every batch reports and the union is returned, or the first
    /// failure or the timeout is returned and partial results are dropped.
    pub fn solve_parallel(&self, seeds: &[Cell]) -> Result<ResultSet> {
        self.check(seeds)?;
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("boggle-worker-{}", i))
            .build()
            .map_err(|e| SolveError::WorkerFailure {
                batch: 0,
                cause: format!("failed to start worker pool: {}", e),
            })?;

        let (tx, rx) = crossbeam_channel::unbounded();
        let batches: Vec<Vec<Cell>> = seeds
            .chunks(self.config.chunk_size)
            .map(<[Cell]>::to_vec)
            .collect();
        let total = batches.len();

        for (batch, seeds) in batches.into_iter().enumerate() {
            let tx = tx.clone();
            let board = Arc::clone(&self.board);
            let dictionary = Arc::clone(&self.dictionary);
            let ply = self.config.ply;
            let policy = self.config.policy;

            pool.spawn(move || {
                let result = run_batch(&board, &*dictionary, &seeds, ply, policy);
                // The receiver is gone if the solve already failed or timed out
                let _ = tx.send((batch, result));
            });
        }
        drop(tx);

        // A timeout too large to land on the clock means no deadline at all
        let deadline = self
            .config
            .timeout
            .and_then(|timeout| start.checked_add(timeout));
        let mut reported = vec![false; total];
        let mut completed = 0;
        let mut words = ResultSet::new();

        while completed < total {
            let received = match deadline {
                Some(deadline) => rx.recv_deadline(deadline),
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok((batch, Ok(batch_words))) => {
                    words.extend(batch_words);
                    reported[batch] = true;
                    completed += 1;
                }
                Ok((batch, Err(cause))) => {
                    tracing::warn!(batch, %cause, "worker failed");
                    return Err(SolveError::WorkerFailure { batch, cause });
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(completed, total, "timed out waiting for workers");
                    return Err(SolveError::AggregationTimeout {
                        timeout: self.config.timeout.unwrap_or_default(),
                        completed,
                        total,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    let batch = reported.iter().position(|done| !done).unwrap_or(0);
                    return Err(SolveError::WorkerFailure {
                        batch,
                        cause: "worker exited without reporting".to_string(),
                    });
                }
            }
        }

        tracing::info!(
            seeds = seeds.len(),
            batches = total,
            workers = self.config.workers,
            words = words.len(),
            elapsed = ?start.elapsed(),
            "parallel solve finished"
        );
        Ok(words)
    }
}

/// Explore `seeds` and union their words. A panic during the exploration is
/// caught and returned as its message.
fn run_batch<D>(
    board: &Board,
    dictionary: &D,
    seeds: &[Cell],
    ply: usize,
    policy: VisitPolicy,
) -> std::result::Result<ResultSet, String>
where
    D: WordIndex + ?Sized,
{
    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut words = ResultSet::new();
        for &seed in seeds {
            words.extend(explore(board, dictionary, seed, ply, policy).words);
        }
        words
    }))
    .map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}
