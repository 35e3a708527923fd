//! Basic types for tiles and the squares they are placed on.
mod cell;
mod tile;
mod word;

pub use cell::Cell;
pub(crate) use tile::to_lower;
pub use tile::{Tile, WILDCARD};
pub use word::Word;
