//! Prefix-pruned depth-first word search from a single seed cell.
//!
//! One exploration owns one word buffer and one visited set, threaded through
//! every recursive call by `&mut`. Nothing here is shared between seeds, which
//! is what lets the solver run seeds on different threads.

use crate::board::{Board, Cell};
use crate::dictionary::WordIndex;
use std::collections::BTreeSet;
use std::ops::AddAssign;

/// Distinct words found by a search.
pub type ResultSet = BTreeSet<String>;

/// What happens to a cell's visited mark once its branch is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitPolicy {
    /// A visited cell stays excluded for the rest of the seed's exploration,
    /// including sibling branches explored later.
    #[default]
    Retained,
    /// The mark is cleared when the branch returns, so every simple path is
    /// considered.
    Backtracking,
}

/// Counters collected during an exploration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, including the root call for the seed
    pub calls: usize,
    /// Calls to `has_prefix`
    pub prefix_queries: usize,
    /// Candidates rejected because no word starts with the extended prefix
    pub pruned: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.calls += other.calls;
        self.prefix_queries += other.prefix_queries;
        self.pruned += other.pruned;
    }
}

/// Result of exploring one seed.
#[derive(Debug, Clone, Default)]
pub struct SeedOutcome {
    pub words: ResultSet,
    pub stats: SearchStats,
}

/// Find every dictionary word reachable by a letter path starting at `seed`,
/// no longer than `ply` letters.
///
/// Panics if `seed` is not on the board.
pub fn explore<D>(
    board: &Board,
    dictionary: &D,
    seed: Cell,
    ply: usize,
    policy: VisitPolicy,
) -> SeedOutcome
where
    D: WordIndex + ?Sized,
{
    let mut explorer = Explorer {
        board,
        dictionary,
        ply,
        policy,
        visited: vec![false; board.size() * board.size()],
        word: String::with_capacity(ply.min(64) + 1),
        outcome: SeedOutcome::default(),
    };

    explorer.word.push(board.letter(seed));
    explorer.visit(seed);

    let outcome = explorer.outcome;
    tracing::debug!(
        seed = %seed,
        words = outcome.words.len(),
        calls = outcome.stats.calls,
        pruned = outcome.stats.pruned,
        "seed explored"
    );
    outcome
}

struct Explorer<'a, D: ?Sized> {
    board: &'a Board,
    dictionary: &'a D,
    ply: usize,
    policy: VisitPolicy,
    visited: Vec<bool>,
    word: String,
    outcome: SeedOutcome,
}

impl<D: WordIndex + ?Sized> Explorer<'_, D> {
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.board.size() + cell.col
    }

    /// `self.word` already ends with the letter of `cell` on entry.
    fn visit(&mut self, cell: Cell) {
        self.outcome.stats.calls += 1;

        if self.word.len() > self.ply {
            return;
        }

        if self.dictionary.is_word(&self.word) {
            tracing::trace!(word = %self.word, "match");
            self.outcome.words.insert(self.word.clone());
        }

        let idx = self.index(cell);
        self.visited[idx] = true;

        // Candidates are settled before descending into any of them
        let mut candidates = Vec::with_capacity(8);
        for next in self.board.neighbors(cell) {
            if self.visited[self.index(next)] {
                continue;
            }
            self.word.push(self.board.letter(next));
            self.outcome.stats.prefix_queries += 1;
            if self.dictionary.has_prefix(&self.word) {
                candidates.push(next);
            } else {
                self.outcome.stats.pruned += 1;
            }
            self.word.pop();
        }

        for next in candidates {
            self.word.push(self.board.letter(next));
            self.visit(next);
            self.word.pop();
        }

        if self.policy == VisitPolicy::Backtracking {
            self.visited[idx] = false;
        }
    }
}
