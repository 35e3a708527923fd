use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "-- -- -- 3w -- -- 3l --",
    "-- -- 2l -- -- 2w -- --",
    "-- 2l -- -- 2l -- -- --",
    "3w -- -- 3l -- -- -- 2w",
    "-- -- 2l -- -- -- 2l --",
    "-- 2w -- -- -- 3l -- --",
    "3l -- -- -- 2l -- -- --",
    "-- -- -- 2w -- -- -- --",
];

/// A bonus square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Multiplier {
    /// Double letter
    DL,
    /// Triple letter
    TL,
    /// Double word
    DW,
    /// Triple word
    TW,
}

use Multiplier::{DL, DW, TL, TW};

impl Multiplier {
    /// Factor for the tile score on this square.
    pub fn letter_factor(self) -> u32 {
        match self {
            DL => 2,
            TL => 3,
            DW | TW => 1,
        }
    }

    /// Factor for the score of a word through this square.
    pub fn word_factor(self) -> u32 {
        match self {
            DW => 2,
            TW => 3,
            DL | TL => 1,
        }
    }

    /// Name as used in the json format.
    pub fn name(self) -> &'static str {
        match self {
            DL => "DL",
            TL => "TL",
            DW => "DW",
            TW => "TW",
        }
    }

    /// Parse the name used in the json format.
    /// ## Errors
    /// If `name` is not one of `DL`, `TL`, `DW`, `TW`.
    pub fn from_name(name: &str) -> Result<Multiplier, Error> {
        match name {
            "DL" => Ok(DL),
            "TL" => Ok(TL),
            "DW" => Ok(DW),
            "TW" => Ok(TW),
            _ => Err(Error::GridParseError(String::from(name))),
        }
    }
}

/// Display in grid notation, `--` is no bonus.
struct Square(Option<Multiplier>);

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            None => write!(f, "--"),
            Some(DL) => write!(f, "2l"),
            Some(TL) => write!(f, "3l"),
            Some(DW) => write!(f, "2w"),
            Some(TW) => write!(f, "3w"),
        }
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" | "ss" => Ok(Square(None)),
            "2l" => Ok(Square(Some(DL))),
            "3l" => Ok(Square(Some(TL))),
            "2w" => Ok(Square(Some(DW))),
            "3w" => Ok(Square(Some(TW))),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = Vec<Vec<Option<Multiplier>>>;

/// Layout of the bonus squares of a board.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard 15x15 `Words With Friends` grid
    /// ## Example
    /// ```
    /// # use wwf_solver::{Grid, Multiplier};
    /// let grid = Grid::default();
    /// assert_eq!(grid.len(), 15);
    /// assert_eq!(grid[0][3], Some(Multiplier::TW));
    /// assert_eq!(grid[7][7], None);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a grid with `rows` x `cols` squares without bonus.
    pub fn empty(rows: usize, cols: usize) -> Grid {
        Grid(vec![vec![None; cols]; rows])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = Grid::empty(N, N);
        for (i, row) in qb.iter().enumerate() {
            for (j, square) in row.split(' ').enumerate() {
                // the quarter board is a constant, so parsing can not fail
                let val = square.parse::<Square>().ok().and_then(|sq| sq.0);
                board.0[i][j] = val;
                board.0[N - i - 1][j] = val;
                board.0[i][N - j - 1] = val;
                board.0[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Get the grid as one string per row
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(|&m| Square(m).to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Each row consists of squares joined by spaces: `--` (no bonus), `2l`, `3l`, `2w` or `3w`.
    /// All rows must have the same number of squares.
    ///
    /// ## Errors
    /// If `grid` has no rows, rows of different length, or squares that can not be parsed.
    /// ## Examples
    /// ```
    /// # use wwf_solver::{Grid, Error, Multiplier};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 3w",
    ///     "-- 2l --",
    ///     "3w -- 3w",
    /// ])?;
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid[1][1], Some(Multiplier::DL));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.is_empty() {
            return Err(Error::InvalidRowCount(0));
        }
        let mut board = Vec::with_capacity(grid.len());
        for (i, row) in grid.iter().enumerate() {
            let row = row
                .as_ref()
                .split_whitespace()
                .map(|square| square.parse::<Square>().map(|sq| sq.0))
                .collect::<Result<Vec<_>, Error>>()?;
            if let Some(first) = board.first().map(Vec::len) {
                if row.len() != first {
                    return Err(Error::InvalidRowLength {
                        row: i,
                        len: row.len(),
                        expected: first,
                    });
                }
            }
            board.push(row);
        }
        Ok(Grid(board))
    }
}
