use crate::grid::Grid;
use crate::tiles::{to_lower, Cell, Tile, Word};
use crate::{Error, TileSet};
use std::fmt;

/// Direction in which a word is laid on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Row and column increment for one step in this direction.
    fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

/// Display the board state as lines of letters.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Board {
    /// An empty board with the standard 15x15 grid.
    fn default() -> Self {
        Board::from_grid(&Grid::default())
    }
}

/// Represents the state of a board: a grid of [`Cell`](crate::Cell)s, each with an optional
/// tile and an optional bonus [`Multiplier`](crate::Multiplier).
///
/// All rows have the same number of cells. Cloning a board gives an independent copy, which
/// is used to try out moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board with `rows` x `cols` cells without bonus.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use wwf_solver::Board;
    ///
    /// let board = Board::new(5, 5);
    /// assert!(board.is_board_empty());
    /// assert_eq!(board.center(), (2, 2));
    ///```
    /// See also:
    /// - [`from_grid`](Board::from_grid)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Board {
        Board::from_grid(&Grid::empty(rows, cols))
    }

    /// Create a new empty board with the bonus squares of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Board {
        let cells = grid
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &multiplier)| Cell::with(i, j, None, multiplier))
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// Create a board from rows of cells.
    /// ## Errors
    /// - If there are no rows, or the rows have different lengths.
    /// - If a cell is not stored at its own row and column.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Board, Error> {
        let expected = match cells.first() {
            Some(row) => row.len(),
            None => return Err(Error::InvalidRowCount(0)),
        };
        for (i, row) in cells.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::InvalidRowLength {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            for (j, cell) in row.iter().enumerate() {
                if (cell.row(), cell.col()) != (i, j) {
                    return Err(Error::CellPositionError {
                        row: cell.row(),
                        col: cell.col(),
                    });
                }
            }
        }
        Ok(Board { cells })
    }

    /// Place tiles from a list of strings, one string per row.
    /// A lowercase letter is a tile scored with `tileset`, an uppercase letter is a blank used
    /// as that letter, and `.` or space is an empty square.
    /// ## Errors
    /// If the number of rows or the row lengths do not match the board, or a character is not
    /// a letter.
    /// ## Examples
    /// ```
    /// use wwf_solver::{Board, TileSet};
    /// let state = &[
    ///     ".....",
    ///     "..h..",
    ///     "..i..",
    ///     ".....",
    ///     ".....",
    /// ];
    /// let board = Board::new(5, 5).with_state_from_strings(&TileSet::default(), state)?;
    /// assert_eq!(board.get_board_words().len(), 1);
    /// # Ok::<(), wwf_solver::Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(
        mut self,
        tileset: &TileSet,
        rows: &[S],
    ) -> Result<Board, Error> {
        if rows.len() != self.rows() {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let cols = self.cols();
        for (i, row) in rows.iter().enumerate() {
            let letters: Vec<char> = row.as_ref().chars().collect();
            if letters.len() != cols {
                return Err(Error::InvalidRowLength {
                    row: i,
                    len: letters.len(),
                    expected: cols,
                });
            }
            for (j, &ch) in letters.iter().enumerate() {
                if let Some(tile) = tile_from_char(tileset, ch)? {
                    self.cells[i][j] = self.cells[i][j].with_tile(tile);
                }
            }
        }
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The middle square, that must be covered by the first move.
    pub fn center(&self) -> (usize, usize) {
        (self.rows() / 2, self.cols() / 2)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Return the cell at `row`, `col`, or None if outside the board.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Check if cell at `row`, `col` holds a tile.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get_cell(row, col).map_or(false, |cell| !cell.is_empty())
    }

    pub fn row_cells(&self, row: usize) -> Vec<Cell> {
        self.cells.get(row).cloned().unwrap_or_default()
    }

    pub fn col_cells(&self, col: usize) -> Vec<Cell> {
        self.cells
            .iter()
            .filter_map(|row| row.get(col).copied())
            .collect()
    }

    /// Board state as one string per row, with `.` for an empty square.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.tile().map_or('.', |tile| tile.letter()))
                    .collect()
            })
            .collect()
    }

    /// Collect the cells from `row`, `col` in `direction`, that can hold a word placing
    /// `to_place` tiles.
    ///
    /// The series ends at the border, or at the first empty cell after `to_place` empty cells
    /// were collected. Cells with tiles in between are part of the series.
    /// Returns an empty series if there are fewer than `to_place` empty cells before the border.
    /// ## Examples
    /// ```
    /// use wwf_solver::{Board, Cell, Direction, TileSet};
    /// let board = Board::new(5, 5)
    ///     .with_state_from_strings(&TileSet::default(), &[".....", "..h..", "..i..", ".....", "....."])?;
    /// let series = board.get_series(0, 2, 2, Direction::Vertical);
    /// let letters: String = series.iter().map(Cell::letter).collect();
    /// assert_eq!(letters, "-hi-");
    /// assert!(board.get_series(3, 2, 3, Direction::Vertical).is_empty());
    /// # Ok::<(), wwf_solver::Error>(())
    /// ```
    pub fn get_series(
        &self,
        row: usize,
        col: usize,
        to_place: usize,
        direction: Direction,
    ) -> Vec<Cell> {
        let (dr, dc) = direction.delta();
        let mut series = Vec::new();
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        while let Some(cell) = self.get_cell(r, c) {
            if cell.is_empty() {
                if count >= to_place {
                    break;
                }
                count += 1;
            }
            series.push(*cell);
            r += dr;
            c += dc;
        }
        if count < to_place {
            return Vec::new();
        }
        series
    }

    /// The `to_place` cells of the middle row, centered on the middle square.
    /// This is the only series considered for the first move.
    pub fn get_empty_board_series(&self, to_place: usize) -> Vec<Cell> {
        let cols = self.cols();
        if to_place == 0 || to_place > cols {
            return Vec::new();
        }
        let (mid_row, mid_col) = self.center();
        let start = mid_col.saturating_sub(to_place / 2).min(cols - to_place);
        self.cells[mid_row][start..start + to_place].to_vec()
    }

    /// Check if there are no tiles on the board.
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_empty)
    }

    /// Check if one of the cells of `word` is the middle square.
    pub fn word_intersects_center(&self, word: &Word) -> bool {
        let center = self.center();
        word.cells()
            .iter()
            .any(|cell| (cell.row(), cell.col()) == center)
    }

    /// Check if the cell at `row`, `col`, or one of its four neighbours holds a tile.
    pub fn cell_touches_tile(&self, row: usize, col: usize) -> bool {
        let up = row.checked_sub(1).map(|r| (r, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        [
            Some((row, col)),
            up,
            Some((row + 1, col)),
            left,
            Some((row, col + 1)),
        ]
        .iter()
        .flatten()
        .any(|&(r, c)| self.is_occupied(r, c))
    }

    /// Check if `word` can be placed on the board.
    ///
    /// The word must touch a tile on the board. On an empty board it must cover the
    /// middle square instead.
    /// ## Errors
    /// - If a cell of `word` is outside the board.
    /// - If a cell of `word` has a different letter than the tile already on the board.
    pub fn word_is_placable(&self, word: &Word) -> Result<bool, Error> {
        let mut touches = false;
        for cell in word.cells() {
            let (row, col) = (cell.row(), cell.col());
            let on_board = self
                .get_cell(row, col)
                .ok_or(Error::TilePlacementError { row, col })?;
            if let (Some(existing), Some(tile)) = (on_board.tile(), cell.tile()) {
                if !existing.matches(tile.letter()) {
                    return Err(Error::TileReplaceError { row, col });
                }
            }
            touches = touches || self.cell_touches_tile(row, col);
        }
        Ok(touches || (self.is_board_empty() && self.word_intersects_center(word)))
    }

    /// Place `word` on the board. Tiles already on the board are kept.
    /// ## Errors
    /// If the word is not placable, see [`word_is_placable`](Board::word_is_placable).
    pub fn add_word(&mut self, word: &Word) -> Result<(), Error> {
        if !self.word_is_placable(word)? {
            return Err(Error::NotConnected(word.to_string()));
        }
        for cell in word.cells() {
            let on_board = &mut self.cells[cell.row()][cell.col()];
            match cell.tile() {
                Some(tile) if on_board.is_empty() => *on_board = on_board.with_tile(tile),
                _ => {}
            }
        }
        Ok(())
    }

    /// The cells of `word` that are still empty on this board.
    pub fn placed_tiles(&self, word: &Word) -> Vec<Cell> {
        word.cells()
            .iter()
            .filter(|cell| !self.is_occupied(cell.row(), cell.col()))
            .copied()
            .collect()
    }

    /// Build a word from `letters` at `row`, `col` in `direction`, using the bonus squares of
    /// the board. Letters are scored with `tileset`; an uppercase letter is a blank.
    /// ## Errors
    /// - If the word does not fit on the board.
    /// - If `letters` contains a character that is not a letter.
    pub fn make_word(
        &self,
        tileset: &TileSet,
        letters: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Word, Error> {
        let (dr, dc) = direction.delta();
        let mut cells = Vec::new();
        let (mut r, mut c) = (row, col);
        for ch in letters.chars() {
            let cell = self
                .get_cell(r, c)
                .ok_or(Error::TilePlacementError { row: r, col: c })?;
            let tile = tile_from_char(tileset, ch)?.ok_or_else(|| invalid_letter(ch))?;
            cells.push(cell.with_tile(tile));
            r += dr;
            c += dc;
        }
        Word::new(cells)
    }

    /// Play `letters` at `row`, `col` in `direction` and return the placed word.
    /// ## Errors
    /// See [`make_word`](Board::make_word) and [`add_word`](Board::add_word).
    /// ## Examples
    /// ```
    /// # use wwf_solver::{Board, Direction, Error, TileSet};
    /// let mut board = Board::default();
    /// let word = board.play_word(&TileSet::default(), "cat", 7, 6, Direction::Horizontal)?;
    /// assert!(board.is_occupied(7, 7));
    /// assert_eq!(word.score(), 6);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_word(
        &mut self,
        tileset: &TileSet,
        letters: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Word, Error> {
        let word = self.make_word(tileset, letters, row, col, direction)?;
        self.add_word(&word)?;
        Ok(word)
    }

    /// Split a row or column into words of two or more letters.
    pub fn get_words_from_series(&self, series: &[Cell]) -> Vec<Word> {
        series
            .split(Cell::is_empty)
            .filter(|run| run.len() >= 2)
            .filter_map(|run| Word::new(run.to_vec()).ok())
            .collect()
    }

    /// All words on the board: first the horizontal, then the vertical words.
    pub fn get_board_words(&self) -> Vec<Word> {
        let horizontal = (0..self.rows()).map(|i| self.row_cells(i));
        let vertical = (0..self.cols()).map(|j| self.col_cells(j));
        horizontal
            .chain(vertical)
            .flat_map(|series| self.get_words_from_series(&series))
            .collect()
    }
}

fn invalid_letter(ch: char) -> Error {
    Error::InvalidLetter(ch.to_string())
}

/// Tile for a character in a board string: `None` for an empty square.
fn tile_from_char(tileset: &TileSet, ch: char) -> Result<Option<Tile>, Error> {
    match ch {
        '.' | ' ' => Ok(None),
        c if c.is_lowercase() => Ok(Some(tileset.tile(c))),
        c if c.is_uppercase() => Ok(Some(Tile::wildcard_from_letter(to_lower(c)))),
        c => Err(invalid_letter(c)),
    }
}
