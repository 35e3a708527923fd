use crate::tiles::{to_lower, Tile, WILDCARD};
use crate::{Error, TileSet};
use multiset::HashMultiSet;
use std::collections::HashMap;
use std::fmt;

/// Number of tiles on a full rack.
pub const RACK_SIZE: usize = 7;

/// The tiles held by the player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters = self
            .tiles
            .iter()
            .map(Tile::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", letters)
    }
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Rack {
        Rack { tiles }
    }

    /// Create a rack from a string of letters, scored with `tileset`. Use `?` for a blank.
    /// ## Example
    /// ```
    /// use wwf_solver::{Rack, TileSet};
    /// let rack = Rack::from_letters(&TileSet::default(), "ho?");
    /// assert_eq!(rack.to_string(), "h o ?");
    /// assert_eq!(rack.scores(), vec![4, 1, 0]);
    /// ```
    pub fn from_letters(tileset: &TileSet, letters: &str) -> Rack {
        Rack::new(tileset.tiles(letters))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn letters(&self) -> Vec<char> {
        self.tiles.iter().map(Tile::letter).collect()
    }

    pub fn scores(&self) -> Vec<u32> {
        self.tiles.iter().map(Tile::score).collect()
    }

    /// Remove and return the first tile with `letter`, or `None` if the rack has no such tile.
    pub fn pop_tile(&mut self, letter: char) -> Option<Tile> {
        let pos = self.tiles.iter().position(|tile| tile.matches(letter))?;
        Some(self.tiles.remove(pos))
    }

    /// Remove the tiles of a committed move from the rack.
    ///
    /// A played tile is matched with an identical rack tile; a zero point tile that has no
    /// identical match is taken from a blank.
    /// ## Errors
    /// If a played tile is not on the rack. The rack is unchanged in that case.
    pub fn commit(&mut self, played: &[Tile]) -> Result<(), Error> {
        let mut tiles = self.tiles.clone();
        for tile in played {
            let pos = tiles
                .iter()
                .position(|t| t == tile)
                .or_else(|| {
                    if tile.score() == 0 {
                        tiles.iter().position(Tile::is_blank)
                    } else {
                        None
                    }
                })
                .ok_or(Error::TileNotInRack(tile.letter()))?;
            tiles.remove(pos);
        }
        self.tiles = tiles;
        Ok(())
    }

    /// Snapshot of the rack, used to check which words can be formed.
    pub fn counts(&self) -> RackCounts {
        RackCounts::from(self)
    }
}

/// Count of the available letters on a rack.
///
/// Used during move generation: every candidate works on its own copy, the rack itself
/// is never modified.
#[derive(Debug, Clone)]
pub struct RackCounts {
    letters: HashMultiSet<char>,
    points: HashMap<char, u32>,
}

impl From<&Rack> for RackCounts {
    fn from(rack: &Rack) -> Self {
        let mut letters = HashMultiSet::new();
        let mut points = HashMap::new();
        for tile in rack.tiles() {
            let letter = to_lower(tile.letter());
            letters.insert(letter);
            points.entry(letter).or_insert_with(|| tile.score());
        }
        RackCounts { letters, points }
    }
}

impl RackCounts {
    /// Number of tiles left.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of tiles left with `letter`.
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.count_of(&to_lower(letter))
    }

    /// Take a tile for `letter`.
    /// If the letter is not available a blank is used, which keeps its zero score.
    /// Returns `None` if neither is left.
    pub fn take(&mut self, letter: char) -> Option<Tile> {
        let letter = to_lower(letter);
        if letter != WILDCARD && self.letters.remove(&letter) {
            let points = self.points.get(&letter).copied().unwrap_or(0);
            return Some(Tile::new(letter, points));
        }
        if self.letters.remove(&WILDCARD) {
            return Some(Tile::wildcard_from_letter(letter));
        }
        None
    }
}
