use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error (de)serializing a board or rack as json
    #[cfg(feature = "json")]
    #[error("Invalid json: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A tile letter must be a single character
    #[error("Invalid letter \"{0}\": must be a single character")]
    InvalidLetter(String),

    /// A word needs at least one cell
    #[error("A word must contain at least one cell")]
    EmptyWord,

    /// Every cell in a word must hold a tile
    #[error("Cell at row:{row}, col:{col} in word has no tile")]
    EmptyCellInWord { row: usize, col: usize },

    /// A board needs at least one row
    #[error("Invalid number of rows {0}")]
    InvalidRowCount(usize),

    /// All rows on the board must have the same length
    #[error("Invalid row {row}: length {len}, expect {expected}")]
    InvalidRowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell was stored at a position that does not match its coordinates
    #[error("Cell claims row:{row}, col:{col} but is stored elsewhere")]
    CellPositionError { row: usize, col: usize },

    /// A line in a letter score file has a score that is not a number
    #[error("Invalid letter score on line {line}: \"{text}\"")]
    ScoreParseError { line: usize, text: String },

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Placing a tile at row:{row}, col:{col} does not fit")]
    TilePlacementError { row: usize, col: usize },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// The word does not touch any tile, and is not a valid first move
    #[error("Word \"{0}\" is not connected to the tiles on the board")]
    NotConnected(String),

    /// A played tile is not on the rack
    #[error("Tile '{0}' is not on the rack")]
    TileNotInRack(char),

    /// A word on the board is not in the dictionary
    #[error("Word \"{0}\" is not in the dictionary")]
    InvalidWord(String),

    /// The board can not be solved because it holds invalid words
    #[error("Board holds words that are not in the dictionary: {0:?}")]
    InvalidBoard(Vec<String>),
}
