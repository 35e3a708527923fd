use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// Letter used for an unassigned blank tile.
pub const WILDCARD: char = '?';

/// Lowercase form of `letter`. A letter without a single character lowercase form is kept.
pub(crate) fn to_lower(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(ch), None) => ch,
        _ => letter,
    }
}

/// A tile with a letter and its point value.
///
/// A blank tile has letter `?` and no points. When it is played it is bound to a letter,
/// but it keeps its zero score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: char,
    score: u32,
}

impl Tile {
    /// Create a new tile.
    pub fn new(letter: char, score: u32) -> Tile {
        Tile { letter, score }
    }

    /// Return a new (unassigned) blank tile.
    pub fn blank() -> Tile {
        Tile::new(WILDCARD, 0)
    }

    /// Return a blank tile bound to `letter`.
    /// ## Example
    /// ```
    /// use wwf_solver::Tile;
    /// let tile = Tile::wildcard_from_letter('q');
    /// assert_eq!(tile.letter(), 'q');
    /// assert_eq!(tile.score(), 0);
    /// ```
    pub fn wildcard_from_letter(letter: char) -> Tile {
        Tile::new(letter, 0)
    }

    /// Create a tile from a string that must hold exactly one character.
    /// ## Errors
    /// If `letter` is empty or longer than one character.
    pub fn from_str_letter(letter: &str, score: u32) -> Result<Tile, Error> {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Tile::new(ch, score)),
            _ => Err(Error::InvalidLetter(String::from(letter))),
        }
    }

    /// Get the letter of the tile.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Get the point value of the tile.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check if this is an unassigned blank.
    pub fn is_blank(&self) -> bool {
        self.letter == WILDCARD
    }

    /// Check if the tile shows `letter`, ignoring case.
    pub fn matches(&self, letter: char) -> bool {
        to_lower(self.letter) == to_lower(letter)
    }
}

impl TryFrom<(&str, u32)> for Tile {
    type Error = Error;
    fn try_from((letter, score): (&str, u32)) -> Result<Self, Self::Error> {
        Tile::from_str_letter(letter, score)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(Tile::new('a', 1), Tile::new('a', 1));
        assert_ne!(Tile::new('a', 1), Tile::new('a', 2));
        assert_ne!(Tile::new('a', 1), Tile::new('b', 1));
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(Tile::new('É', 1).matches('é'));
        assert!(Tile::new('ü', 2).matches('Ü'));
        assert!(!Tile::new('e', 1).matches('é'));
        assert_eq!(to_lower('Ä'), 'ä');
        assert_eq!(to_lower('-'), '-');
    }

    #[test]
    fn test_blank() {
        let blank = Tile::blank();
        assert!(blank.is_blank());
        assert_eq!(blank.score(), 0);
        let bound = Tile::wildcard_from_letter('t');
        assert!(!bound.is_blank());
        assert!(bound.matches('T'));
    }

    #[test]
    fn test_from_str_letter() -> Result<(), Error> {
        let tile = Tile::try_from(("x", 8))?;
        assert_eq!(tile, Tile::new('x', 8));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLetter(\"ab\")")]
    fn test_multi_char_letter() {
        Tile::from_str_letter("ab", 1).unwrap();
    }
}
