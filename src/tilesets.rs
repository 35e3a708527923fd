use crate::tiles::{to_lower, Tile, WILDCARD};
use crate::Error;
use log::info;
use std::collections::HashMap;
use std::fs::read_to_string;

/// letter, points
type TileInfo = (char, u32);

const DEFAULT_TILESET: &[TileInfo] = &[
    ('a', 1),
    ('b', 4),
    ('c', 4),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 3),
    ('h', 4),
    ('i', 1),
    ('j', 10),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 4),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 2),
    ('v', 4),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// The point value of each letter.
///
/// Used to turn plain letters into scored [`Tile`](crate::Tile)s, for example when a board
/// is read from strings.
#[derive(Debug, Clone)]
pub struct TileSet {
    points: HashMap<char, u32>,
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::from_scores(DEFAULT_TILESET)
    }
}

impl TileSet {
    /// Return a new `TileSet` with the given (letter, points) pairs.
    /// Letters are case insensitive.
    pub fn from_scores(scores: &[(char, u32)]) -> TileSet {
        let points = scores
            .iter()
            .map(|&(letter, points)| (to_lower(letter), points))
            .collect();
        TileSet { points }
    }

    /// Read letter scores from a file with a `letter,points` pair on each line.
    /// ## Errors
    /// Fails if the file can not be read, or has a line that can not be parsed.
    pub fn from_file(path: &str) -> Result<TileSet, Error> {
        let text = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let tileset = TileSet::from_csv(&text)?;
        info!("loaded {} letter scores from {}", tileset.points.len(), path);
        Ok(tileset)
    }

    /// Parse letter scores from `letter,points` lines. Lines that do not have exactly two
    /// fields are skipped.
    /// ## Errors
    /// If a letter is not a single character, or the points are not a number.
    /// ## Example
    /// ```
    /// use wwf_solver::TileSet;
    /// let tileset = TileSet::from_csv("A,1\nq,10\n\n")?;
    /// assert_eq!(tileset.points('a'), 1);
    /// assert_eq!(tileset.points('Q'), 10);
    /// # Ok::<(), wwf_solver::Error>(())
    /// ```
    pub fn from_csv(text: &str) -> Result<TileSet, Error> {
        let mut scores = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if let [letter, points] = fields[..] {
                let tile = Tile::from_str_letter(letter, 0)?;
                let points = points.parse::<u32>().map_err(|_| Error::ScoreParseError {
                    line: i + 1,
                    text: String::from(line),
                })?;
                scores.push((tile.letter(), points));
            }
        }
        Ok(TileSet::from_scores(&scores))
    }

    /// Return the points for letter, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.points
            .get(&to_lower(letter))
            .copied()
            .unwrap_or(0)
    }

    /// Return a tile for `letter`. The wildcard `?` gives a blank.
    /// ## Example
    /// ```
    /// use wwf_solver::{Tile, TileSet};
    /// let tileset = TileSet::default();
    /// assert_eq!(tileset.tile('h'), Tile::new('h', 4));
    /// assert_eq!(tileset.tile('?'), Tile::blank());
    /// ```
    pub fn tile(&self, letter: char) -> Tile {
        if letter == WILDCARD {
            return Tile::blank();
        }
        Tile::new(letter, self.points(letter))
    }

    /// Return a tile for every character in `letters`.
    pub fn tiles(&self, letters: &str) -> Vec<Tile> {
        letters.chars().map(|letter| self.tile(letter)).collect()
    }
}
