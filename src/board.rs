//! Square letter grid and the adjacency model over its cells.

use crate::error::{Result, SolveError};
use rand::Rng;
use std::fmt;

/// A grid position. Two cells carrying the same letter are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// How neighbors are computed at the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Edge cells simply have fewer neighbors
    #[default]
    Clipped,
    /// Coordinates wrap around, so the grid behaves like a torus
    Wrapping,
}

/// The "the quick brown fox" grid, handy for reproducible runs.
pub const DEMO_GRID: [&str; 8] = [
    "thequick", "brownfxx", "jumpedoo", "overthel", "azydogjs", "xidynown", "pivsmtkn", "fyfhefbw",
];

/// An immutable N×N grid of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    letters: Vec<char>,
    adjacency: Adjacency,
}

impl Board {
    /// Build a board from rows of letters. Uppercase letters are folded to lowercase.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SolveError::config("board must have at least one cell"));
        }

        let mut letters = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SolveError::config(format!(
                    "board must be square: row {} has {} letters, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            for c in row {
                let c = c.to_ascii_lowercase();
                if !c.is_ascii_lowercase() {
                    return Err(SolveError::config(format!(
                        "board cell in row {} is not a letter: {:?}",
                        r, c
                    )));
                }
                letters.push(c);
            }
        }

        Ok(Self {
            size,
            letters,
            adjacency: Adjacency::Clipped,
        })
    }

    /// Parse a literal grid. Rows are separated by newlines or `/`; whitespace
    /// and commas inside a row are ignored, so `"c a/t s"` and `"ca\nts"` match.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .split(['\n', '/'])
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace() && *c != ',')
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Self::new(rows)
    }

    /// A grid with a uniformly random letter in each cell.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Result<Self> {
        let rows = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| rng.random_range(b'a'..=b'z') as char)
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn demo() -> Self {
        Self {
            size: DEMO_GRID.len(),
            letters: DEMO_GRID.concat().chars().collect(),
            adjacency: Adjacency::Clipped,
        }
    }

    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// The letter at `cell`. Panics if the cell is off the board.
    pub fn letter(&self, cell: Cell) -> char {
        assert!(self.contains(cell), "cell {} is outside a {}x{} board", cell, self.size, self.size);
        self.letters[cell.row * self.size + cell.col]
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Cell::new(row, col)))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size)
    }

    /// Cells in the Moore neighborhood of `cell`, in fixed order: row offset
    /// -1, 0, +1, then column offset -1, 0, +1.
    ///
    /// Panics if `cell` is outside the board.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        assert!(self.contains(cell), "cell {} is outside a {}x{} board", cell, self.size, self.size);

        let n = self.size as isize;
        let mut out = Vec::with_capacity(8);
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = cell.row as isize + dr;
                let c = cell.col as isize + dc;
                let next = match self.adjacency {
                    Adjacency::Clipped => {
                        if r < 0 || r >= n || c < 0 || c >= n {
                            continue;
                        }
                        Cell::new(r as usize, c as usize)
                    }
                    Adjacency::Wrapping => {
                        Cell::new(r.rem_euclid(n) as usize, c.rem_euclid(n) as usize)
                    }
                };
                // Small wrapped boards fold back onto themselves
                if next != cell && !out.contains(&next) {
                    out.push(next);
                }
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
