//! # Boggle Solver
//!
//! Finds every dictionary word that can be traced through adjacent cells of a
//! square letter grid.
//!
//! Each cell seeds an independent depth-first search that is pruned as soon as
//! no dictionary word starts with the letters collected so far. Seeds can be
//! explored sequentially or spread over a worker pool, and the per-seed results
//! are merged into a single set.

pub mod board;
pub mod dictionary;
pub mod error;
pub mod search;
pub mod solver;

pub use board::{Adjacency, Board, Cell};
pub use dictionary::{Dictionary, WordIndex};
pub use error::{Result, SolveError};
pub use search::{explore, ResultSet, SearchStats, SeedOutcome, VisitPolicy};
pub use solver::{Solver, SolverConfig};

use std::path::Path;
use std::sync::Arc;

/// Shortest word kept in the dictionary
pub const MIN_WORD_LENGTH: usize = 4;

/// Build the index used by the search, dropping words shorter than
/// [`MIN_WORD_LENGTH`].
pub fn build_dictionary<I, S>(words: I) -> Dictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Dictionary::new(words)
}

/// Cells adjacent to `cell` on `board`.
pub fn enumerate_neighbors(board: &Board, cell: Cell) -> Vec<Cell> {
    board.neighbors(cell)
}

/// Solve `board` from `seeds`, or from every cell when `seeds` is `None`.
pub fn solve<D>(
    board: Arc<Board>,
    dictionary: Arc<D>,
    seeds: Option<&[Cell]>,
    config: &SolverConfig,
) -> Result<ResultSet>
where
    D: WordIndex + Send + Sync + 'static,
{
    Solver::from_shared(board, dictionary, config.clone()).solve(seeds)
}

/// Split a newline-delimited word list into lowercase words.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Read a newline-delimited word list from disk.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let words = parse_word_list(&text);
    tracing::info!(words = words.len(), "loaded word list");
    Ok(words)
}
