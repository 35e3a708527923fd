use super::cell::Cell;
use crate::board::Direction;
use crate::error::Error;
use std::fmt;

/// A contiguous run of cells on the board that all hold a tile.
///
/// A `Word` is either read from the board, or it is a candidate move that is about to be played.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    cells: Vec<Cell>,
}

impl Word {
    /// Create a word from `cells`.
    /// ## Errors
    /// If `cells` is empty, or one of the cells has no tile.
    /// ## Examples
    /// ```
    /// use wwf_solver::{Cell, Tile, Word};
    /// let cells = vec![
    ///     Cell::new(7, 7).with_tile(Tile::new('c', 3)),
    ///     Cell::new(7, 8).with_tile(Tile::new('a', 1)),
    ///     Cell::new(7, 9).with_tile(Tile::new('t', 1)),
    /// ];
    /// let word = Word::new(cells)?;
    /// assert_eq!(word.to_string(), "cat");
    /// assert_eq!(word.score(), 5);
    /// # Ok::<(), wwf_solver::Error>(())
    /// ```
    pub fn new(cells: Vec<Cell>) -> Result<Word, Error> {
        if cells.is_empty() {
            return Err(Error::EmptyWord);
        }
        if let Some(cell) = cells.iter().find(|cell| cell.is_empty()) {
            return Err(Error::EmptyCellInWord {
                row: cell.row(),
                col: cell.col(),
            });
        }
        Ok(Word { cells })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row and column of the first cell.
    pub fn start(&self) -> (usize, usize) {
        let cell = &self.cells[0];
        (cell.row(), cell.col())
    }

    /// A single cell word counts as horizontal.
    pub fn direction(&self) -> Direction {
        match self.cells.get(1) {
            Some(next) if next.col() == self.cells[0].col() => Direction::Vertical,
            _ => Direction::Horizontal,
        }
    }

    /// The letters of the word in lowercase.
    pub fn letters(&self) -> String {
        self.cells.iter().map(Cell::letter).collect()
    }

    /// Points for this word.
    ///
    /// The tile scores are multiplied with the letter bonus of their cell, and the sum
    /// is multiplied with the word bonus of every cell in the word.
    pub fn score(&self) -> u32 {
        let mut word_points = 0;
        let mut word_multiplicator = 1;
        for cell in &self.cells {
            let tile_points = cell.tile().map_or(0, |tile| tile.score());
            word_points += tile_points * cell.letter_factor();
            word_multiplicator *= cell.word_factor();
        }
        word_points * word_multiplicator
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
