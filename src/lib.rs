//! A Words With Friends move solver for Rust.
//! <br>
//! Given a board, a rack of tiles and a dictionary, this crate finds every move that can be
//! played, scores it, and ranks the moves with the best first.
//! It can use the `rayon` crate to score the candidate moves in parallel.
//!
//! # How to use `wwf_solver`
//! Start by creating a board. By default the standard 15x15 Words With Friends board is used,
//! but you can build a board from your own bonus grid, or read it from json.
//! The dictionary must be in utf-8 and contain one word per line.
//!
//! # Basic usage
//!  ```
//! use wwf_solver::{solve, Board, Dictionary, Direction, Rack, TileSet};
//!
//! let tileset = TileSet::default();
//! let dictionary = Dictionary::from_words(&["rust", "rest", "tree"]);
//! let mut board = Board::default();
//! board.play_word(&tileset, "rust", 7, 6, Direction::Horizontal)?;
//! let rack = Rack::from_letters(&tileset, "etre");
//! let moves = solve(&dictionary, &board, &rack)?;
//! for m in &moves {
//!     println!("{}", m);
//! }
//! assert!(moves.iter().all(|m| m.word.letters() != "rust"));
//! # Ok::<(), wwf_solver::Error>(())
//! ```
//!
//! # About implementation
//! Candidate words are found by looking up a pattern for every series of cells on the board
//! in the dictionary, where `-` marks a square that takes a tile from the rack.
//! The pattern lookups are cached. Each candidate is then played on a copy of the board,
//! and all words it forms must be in the dictionary.
mod board;
#[cfg(feature = "json")]
mod codec;
mod dictionary;
mod error;
mod game;
mod grid;
mod rack;
mod tiles;
mod tilesets;

pub use board::{Board, Direction};
#[cfg(feature = "json")]
pub use codec::{
    board_from_json, board_to_json, rack_from_json, rack_to_json, CellRecord, TileRecord,
};
pub use dictionary::{Dictionary, Matches, ANY};
pub use error::Error;
pub use game::{solve, validate, Game, Move, BINGO_BONUS};
pub use grid::{Grid, Multiplier};
pub use rack::{Rack, RackCounts, RACK_SIZE};
pub use tiles::{Cell, Tile, Word, WILDCARD};
pub use tilesets::TileSet;
