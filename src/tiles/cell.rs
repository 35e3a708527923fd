use super::tile::{to_lower, Tile};
use crate::grid::Multiplier;
use std::fmt;

/// A square on the board at `row`, `col`.
///
/// The square may hold a [`Tile`](crate::Tile), and may carry a bonus [`Multiplier`](crate::Multiplier).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    tile: Option<Tile>,
    multiplier: Option<Multiplier>,
}

impl Cell {
    /// An empty cell without bonus.
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            tile: None,
            multiplier: None,
        }
    }

    /// Create a cell with all fields given.
    pub fn with(
        row: usize,
        col: usize,
        tile: Option<Tile>,
        multiplier: Option<Multiplier>,
    ) -> Cell {
        Cell {
            row,
            col,
            tile,
            multiplier,
        }
    }

    /// Return a copy of this cell holding `tile`.
    pub fn with_tile(self, tile: Tile) -> Cell {
        Cell {
            tile: Some(tile),
            ..self
        }
    }

    /// Return a copy of this cell with bonus `multiplier`.
    pub fn with_multiplier(self, multiplier: Option<Multiplier>) -> Cell {
        Cell { multiplier, ..self }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    pub fn multiplier(&self) -> Option<Multiplier> {
        self.multiplier
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// The lowercase letter on this cell, or `-` if it is empty.
    pub fn letter(&self) -> char {
        self.tile.map_or('-', |tile| to_lower(tile.letter()))
    }

    /// Factor applied to the tile score on this cell.
    pub fn letter_factor(&self) -> u32 {
        self.multiplier.map_or(1, |m| m.letter_factor())
    }

    /// Factor applied to the score of a word through this cell.
    pub fn word_factor(&self) -> u32 {
        self.multiplier.map_or(1, |m| m.word_factor())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.tile {
            Some(tile) => write!(f, "{}", tile),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let cell = Cell::new(3, 4);
        assert!(cell.is_empty());
        assert_eq!(cell.letter(), '-');
        assert_eq!(cell.to_string(), "-");
        let cell = cell.with_tile(Tile::new('Q', 10));
        assert!(!cell.is_empty());
        assert_eq!(cell.letter(), 'q');
        assert_eq!((cell.row(), cell.col()), (3, 4));
    }

    #[test]
    fn test_equality() {
        let a = Cell::new(0, 0).with_multiplier(Some(Multiplier::DL));
        assert_ne!(a, Cell::new(0, 0));
        assert_ne!(a, Cell::new(0, 1).with_multiplier(Some(Multiplier::DL)));
        assert_eq!(a, Cell::with(0, 0, None, Some(Multiplier::DL)));
    }

    #[test]
    fn test_factors() {
        let cell = Cell::new(0, 0).with_multiplier(Some(Multiplier::TL));
        assert_eq!((cell.letter_factor(), cell.word_factor()), (3, 1));
        let cell = cell.with_multiplier(Some(Multiplier::DW));
        assert_eq!((cell.letter_factor(), cell.word_factor()), (1, 2));
        let cell = cell.with_multiplier(None);
        assert_eq!((cell.letter_factor(), cell.word_factor()), (1, 1));
    }
}
