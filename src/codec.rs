//! Read and write boards and racks as json.
//!
//! A board is a list of rows, each row a list of cells:
//! ```json
//! [[{"row": 0, "col": 0, "tile": {"letter": "h", "score": 4}, "multiplier": "DW"}, ...], ...]
//! ```
//! `tile` and `multiplier` may be `null` or left out. A rack is a list of tiles.
use crate::grid::Multiplier;
use crate::tiles::{Cell, Tile};
use crate::{Board, Error, Rack};
use serde::{Deserialize, Serialize};

/// A tile as stored in json. The letter must be a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub letter: String,
    pub score: u32,
}

/// A board square as stored in json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub tile: Option<TileRecord>,
    #[serde(default)]
    pub multiplier: Option<String>,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        TileRecord {
            letter: tile.letter().to_string(),
            score: tile.score(),
        }
    }
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        CellRecord {
            row: cell.row(),
            col: cell.col(),
            tile: cell.tile().as_ref().map(TileRecord::from),
            multiplier: cell.multiplier().map(|m| String::from(m.name())),
        }
    }
}

impl TileRecord {
    fn to_tile(&self) -> Result<Tile, Error> {
        Tile::from_str_letter(&self.letter, self.score)
    }
}

impl CellRecord {
    fn to_cell(&self) -> Result<Cell, Error> {
        let tile = self.tile.as_ref().map(TileRecord::to_tile).transpose()?;
        let multiplier = self
            .multiplier
            .as_deref()
            .map(Multiplier::from_name)
            .transpose()?;
        Ok(Cell::with(self.row, self.col, tile, multiplier))
    }
}

/// Write `board` as json.
/// ## Errors
/// If serialization fails.
pub fn board_to_json(board: &Board) -> Result<String, Error> {
    let rows: Vec<Vec<CellRecord>> = board
        .cells()
        .iter()
        .map(|row| row.iter().map(CellRecord::from).collect())
        .collect();
    Ok(serde_json::to_string(&rows)?)
}

/// Read a board from json.
/// ## Errors
/// - If `json` is not a list of rows of cells.
/// - If a tile letter is not a single character, or a multiplier name is unknown.
/// - If the rows are empty, differ in length, or a cell is not at its own row and column.
/// ## Example
/// ```
/// use wwf_solver::{board_from_json, Multiplier};
/// let json = r#"[[{"row": 0, "col": 0, "tile": {"letter": "a", "score": 1}},
///                 {"row": 0, "col": 1, "multiplier": "TL"}]]"#;
/// let board = board_from_json(json)?;
/// assert_eq!((board.rows(), board.cols()), (1, 2));
/// assert!(board.is_occupied(0, 0));
/// assert_eq!(board.get_cell(0, 1).and_then(|c| c.multiplier()), Some(Multiplier::TL));
/// # Ok::<(), wwf_solver::Error>(())
/// ```
pub fn board_from_json(json: &str) -> Result<Board, Error> {
    let rows: Vec<Vec<CellRecord>> = serde_json::from_str(json)?;
    let cells = rows
        .iter()
        .map(|row| row.iter().map(CellRecord::to_cell).collect())
        .collect::<Result<Vec<Vec<Cell>>, Error>>()?;
    Board::from_cells(cells)
}

/// Write `rack` as json.
/// ## Errors
/// If serialization fails.
pub fn rack_to_json(rack: &Rack) -> Result<String, Error> {
    let tiles: Vec<TileRecord> = rack.tiles().iter().map(TileRecord::from).collect();
    Ok(serde_json::to_string(&tiles)?)
}

/// Read a rack from json. A blank is a tile with letter `?`.
/// ## Errors
/// If `json` is not a list of tiles, or a letter is not a single character.
pub fn rack_from_json(json: &str) -> Result<Rack, Error> {
    let records: Vec<TileRecord> = serde_json::from_str(json)?;
    let tiles = records
        .iter()
        .map(TileRecord::to_tile)
        .collect::<Result<Vec<Tile>, Error>>()?;
    Ok(Rack::new(tiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, TileSet};

    #[test]
    fn test_board_json() -> Result<(), Error> {
        let tileset = TileSet::default();
        let mut board = Board::default();
        board.play_word(&tileset, "cat", 7, 6, Direction::Horizontal)?;
        let json = board_to_json(&board)?;
        let decoded = board_from_json(&json)?;
        assert_eq!(decoded, board);
        assert_eq!(decoded.to_strings(), board.to_strings());
        Ok(())
    }

    #[test]
    fn test_cell_record() -> Result<(), Error> {
        let json = r#"{"row": 3, "col": 4, "tile": null, "multiplier": "TW"}"#;
        let record: CellRecord = serde_json::from_str(json)?;
        let cell = record.to_cell()?;
        assert_eq!((cell.row(), cell.col()), (3, 4));
        assert!(cell.is_empty());
        assert_eq!(cell.word_factor(), 3);

        let record: CellRecord = serde_json::from_str(r#"{"row": 0, "col": 0}"#)?;
        assert_eq!(record.to_cell()?, Cell::new(0, 0));
        Ok(())
    }

    #[test]
    fn test_rack_json() -> Result<(), Error> {
        let rack = rack_from_json(r#"[{"letter": "h", "score": 4}, {"letter": "?", "score": 0}]"#)?;
        assert_eq!(rack.letters(), vec!['h', '?']);
        assert_eq!(rack.scores(), vec![4, 0]);
        assert_eq!(rack_from_json(&rack_to_json(&rack)?)?, rack);
        assert!(rack_from_json("[]")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_json() {
        let result = rack_from_json(r#"[{"letter": "ab", "score": 1}]"#);
        assert!(matches!(result, Err(Error::InvalidLetter(letter)) if letter == "ab"));

        let result = rack_from_json(r#"[{"letter": "a"}]"#);
        assert!(matches!(result, Err(Error::JsonError(_))));

        let result = board_from_json(r#"[[{"row": 0, "col": 0, "multiplier": "QW"}]]"#);
        assert!(matches!(result, Err(Error::GridParseError(_))));

        let result = board_from_json(r#"[[{"row": 0, "col": 1}]]"#);
        assert!(matches!(result, Err(Error::CellPositionError { row: 0, col: 1 })));

        let result = board_from_json("[]");
        assert!(matches!(result, Err(Error::InvalidRowCount(0))));

        let result = board_from_json(r#"[[{"row": 0, "col": 0}], []]"#);
        assert!(matches!(result, Err(Error::InvalidRowLength { row: 1, .. })));
    }
}
