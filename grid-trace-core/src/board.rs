use crate::{error::*, prefilter::LetterCounts, CellIndex};
use snafu::ensure;
use std::str::FromStr;

/// The number of letters a board cell or a word character can hold (a-z).
pub const ALPHABET_LEN: usize = 26;

/// The number of neighbors of a cell: left, right, up, down.
const NB_NEIGHBORS: usize = 4;

/// Return the alphabet slot of a lowercase ASCII letter.
pub(crate) fn letter_slot(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// A rectangular grid of lowercase letters.
///
/// Cells are numbered in row-major order by [CellIndex].
/// The neighbors of every cell and the cells holding every letter are
/// computed once, when the board is created.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    letters: Vec<u8>,
    neighbors: Vec<[Option<CellIndex>; NB_NEIGHBORS]>,
    by_letter: Vec<Vec<CellIndex>>,
}

impl Board {
    /// Create a board from its rows, one string per row.
    ///
    /// Every row must be non-empty, of the same length as the first one,
    /// and only contain lowercase ASCII letters.
    pub fn new<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_chars(&grid)
    }

    /// Create a board from a grid of characters.
    pub fn from_chars(grid: &[Vec<char>]) -> Result<Self> {
        ensure!(!grid.is_empty(), EmptyBoard);

        let cols = grid[0].len();
        let mut letters = Vec::with_capacity(grid.len() * cols);

        for (row, line) in grid.iter().enumerate() {
            ensure!(!line.is_empty(), EmptyRow { row });
            ensure!(
                line.len() == cols,
                RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                }
            );
            for (col, &letter) in line.iter().enumerate() {
                ensure!(
                    letter.is_ascii_lowercase(),
                    InvalidCell { row, col, letter }
                );
                letters.push(letter as u8);
            }
        }

        Ok(Self::from_letters(grid.len(), cols, letters))
    }

    /// Build the lookup tables of already validated letters.
    fn from_letters(rows: usize, cols: usize, letters: Vec<u8>) -> Self {
        let cell = |i: usize| CellIndex::new(i as u32);

        let neighbors = (0..letters.len())
            .map(|i| {
                let (row, col) = (i / cols, i % cols);
                [
                    if col > 0 { Some(cell(i - 1)) } else { None },
                    if col + 1 < cols { Some(cell(i + 1)) } else { None },
                    if row > 0 { Some(cell(i - cols)) } else { None },
                    if row + 1 < rows { Some(cell(i + cols)) } else { None },
                ]
            })
            .collect();

        let mut by_letter = vec![Vec::new(); ALPHABET_LEN];
        for (i, &letter) in letters.iter().enumerate() {
            by_letter[letter_slot(letter)].push(cell(i));
        }

        Self {
            rows,
            cols,
            letters,
            neighbors,
            by_letter,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the number of cells on the board.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// A valid board always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Return the letter of a cell.
    pub fn letter(&self, cell: CellIndex) -> u8 {
        self.letters[cell.get()]
    }

    /// Return the cell at the given coordinates, if it is on the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellIndex> {
        if row < self.rows && col < self.cols {
            Some(CellIndex::new((row * self.cols + col) as u32))
        } else {
            None
        }
    }

    /// Return the (row, column) coordinates of a cell.
    pub fn coords(&self, cell: CellIndex) -> (usize, usize) {
        (cell.get() / self.cols, cell.get() % self.cols)
    }

    /// Iterate over all the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.letters.len() as u32).map(CellIndex::new)
    }

    /// Return the neighbor slots of a cell, in the left, right, up, down order.
    /// A slot is None when the neighbor would be outside of the board.
    pub fn neighbor_slots(&self, cell: CellIndex) -> &[Option<CellIndex>; NB_NEIGHBORS] {
        &self.neighbors[cell.get()]
    }

    /// Iterate over the existing neighbors of a cell.
    pub fn neighbors(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        self.neighbor_slots(cell).iter().flatten().copied()
    }

    pub fn are_adjacent(&self, a: CellIndex, b: CellIndex) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// Return all the cells holding a letter, in row-major order.
    pub fn cells_with(&self, letter: u8) -> &[CellIndex] {
        if letter.is_ascii_lowercase() {
            &self.by_letter[letter_slot(letter)]
        } else {
            &[]
        }
    }

    /// Return how many times every letter appears on the board.
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.letters)
    }

    /// Return the word spelled by a sequence of cells.
    pub fn spell(&self, cells: &[CellIndex]) -> String {
        cells.iter().map(|&c| self.letter(c) as char).collect()
    }
}

/// Parse a board written with one row per line.
/// Blank lines and whitespace between letters are ignored, letters are lowercased.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let grid: Vec<Vec<char>> = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_ascii_lowercase())
                    .collect()
            })
            .collect();

        Self::from_chars(&grid)
    }
}
