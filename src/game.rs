use crate::rack::{RackCounts, RACK_SIZE};
use crate::tiles::{Cell, Word};
use crate::{Board, Dictionary, Direction, Error, Rack};
use log::{debug, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Extra points for playing all tiles of a full rack in one move.
///
/// The bonus is only given when the rack held at least [`RACK_SIZE`](crate::RACK_SIZE)
/// tiles. Playing out a shorter rack, as at the end of a game, scores no bonus.
pub const BINGO_BONUS: u32 = 40;

/// A move that can be played, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    /// The word laid down by the move
    pub word: Word,
    /// All words formed by the move, including crossing words
    pub words: Vec<Word>,
    /// The cells that receive a tile from the rack
    pub tiles: Vec<Cell>,
    /// Total points for the move
    pub score: u32,
}

impl Move {
    /// Number of tiles taken from the rack.
    pub fn placed(&self) -> usize {
        self.tiles.len()
    }

    /// Row, column and direction of the played word.
    pub fn position(&self) -> (usize, usize, Direction) {
        let (row, col) = self.word.start();
        (row, col, self.word.direction())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (row, col, direction) = self.position();
        let words = self
            .words
            .iter()
            .map(Word::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "{:2} {:2} {:10} {:3} {}",
            row,
            col,
            format!("{:?}", direction),
            self.score,
            words
        )
    }
}

/// Finds all moves for a rack on a board.
///
/// The board, rack and dictionary are only read; moves are tried out on copies of the board.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    board: &'a Board,
    rack: &'a Rack,
    deadline: Option<Duration>,
}

impl<'a> Game<'a> {
    pub fn new(dictionary: &'a Dictionary, board: &'a Board, rack: &'a Rack) -> Game<'a> {
        Game {
            dictionary,
            board,
            rack,
            deadline: None,
        }
    }

    /// Stop looking for new words after `deadline`. The moves found so far are still
    /// scored and returned.
    pub fn with_deadline(mut self, deadline: Duration) -> Game<'a> {
        self.deadline = Some(deadline);
        self
    }

    /// Check that all words on our board are in the dictionary.
    /// ## Errors
    /// Returns an [`InvalidWord`](Error::InvalidWord) error for each word not in the dictionary.
    pub fn validate_board(&self) -> Result<(), Vec<Error>> {
        validate(self.dictionary, self.board)
    }

    /// Return the words from the dictionary that fit on `series`, with the tiles from `rack`
    /// placed on the empty cells.
    ///
    /// A missing letter is replaced by a blank if the rack has one.
    pub fn find_words_for_series(&self, series: &[Cell], rack: &RackCounts) -> Vec<Word> {
        if series.is_empty() {
            return Vec::new();
        }
        let pattern: String = series.iter().map(Cell::letter).collect();
        self.dictionary
            .search_with_pattern(&pattern)
            .iter()
            .filter_map(|word| {
                let mut rack = rack.clone();
                let cells = series
                    .iter()
                    .zip(word.chars())
                    .map(|(cell, letter)| {
                        if cell.is_empty() {
                            rack.take(letter).map(|tile| cell.with_tile(tile))
                        } else {
                            Some(*cell)
                        }
                    })
                    .collect::<Option<Vec<Cell>>>()?;
                Word::new(cells).ok()
            })
            .collect()
    }

    /// Return all candidate words, from the longest (all rack tiles) to a single tile.
    ///
    /// Candidates are not checked for crossing words or for connection to the other tiles.
    pub fn get_possible_words(&self) -> Vec<Word> {
        let start = Instant::now();
        let rack = self.rack.counts();
        let (rows, cols) = (self.board.rows(), self.board.cols());
        let board_is_empty = self.board.is_board_empty();
        let mut candidates = Vec::new();

        for length in (1..=self.rack.len()).rev() {
            if let Some(deadline) = self.deadline {
                if start.elapsed() >= deadline {
                    warn!(
                        "deadline of {:?} reached, skip words with {} tiles or less",
                        deadline, length
                    );
                    break;
                }
            }
            let before = candidates.len();
            if board_is_empty {
                let series = self.board.get_empty_board_series(length);
                candidates.extend(self.find_words_for_series(&series, &rack));
            } else {
                for row in 0..rows {
                    for col in 0..cols {
                        // a series must start right after an empty cell or the border
                        if col + length <= cols && (col == 0 || !self.board.is_occupied(row, col - 1))
                        {
                            let series =
                                self.board
                                    .get_series(row, col, length, Direction::Horizontal);
                            candidates.extend(self.find_words_for_series(&series, &rack));
                        }
                        if row + length <= rows && (row == 0 || !self.board.is_occupied(row - 1, col))
                        {
                            let series = self.board.get_series(row, col, length, Direction::Vertical);
                            candidates.extend(self.find_words_for_series(&series, &rack));
                        }
                    }
                }
            }
            debug!(
                "{} candidates placing {} tiles",
                candidates.len() - before,
                length
            );
        }
        candidates
    }

    /// Try `word` on a copy of the board, and score it.
    ///
    /// Returns `None` if the word can not be placed, or if one of the words it forms is not
    /// in the dictionary. Only words that are not in `existing` are scored.
    fn evaluate(&self, word: &Word, existing: &HashSet<Word>) -> Option<Move> {
        let tiles = self.board.placed_tiles(word);
        let mut board = self.board.clone();
        board.add_word(word).ok()?;
        let words: Vec<Word> = board
            .get_board_words()
            .into_iter()
            .filter(|w| !existing.contains(w))
            .collect();
        if words.iter().any(|w| !self.dictionary.contains(&w.letters())) {
            return None;
        }
        let mut score: u32 = words.iter().map(Word::score).sum();
        if tiles.len() == self.rack.len() && tiles.len() >= RACK_SIZE {
            score += BINGO_BONUS;
        }
        Some(Move {
            word: word.clone(),
            words,
            tiles,
            score,
        })
    }

    /// Return all valid moves, sorted by score with the best move first.
    ///
    /// A move is valid if it connects to the tiles on the board (or covers the center of an
    /// empty board), and all words it forms are in the dictionary.
    pub fn get_scored_possible_words(&self) -> Vec<Move> {
        let candidates = self.get_possible_words();
        let existing: HashSet<Word> = self.board.get_board_words().into_iter().collect();

        #[cfg(feature = "rayon")]
        let scored: Vec<Move> = candidates
            .par_iter()
            .filter_map(|word| self.evaluate(word, &existing))
            .collect();
        #[cfg(not(feature = "rayon"))]
        let scored: Vec<Move> = candidates
            .iter()
            .filter_map(|word| self.evaluate(word, &existing))
            .collect();

        // the same tiles can be found from a horizontal and a vertical series
        let mut seen = HashSet::new();
        let mut moves: Vec<Move> = scored
            .into_iter()
            .filter(|m| seen.insert(m.tiles.clone()))
            .collect();
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(
            "{} moves from {} candidates, best score {:?}",
            moves.len(),
            candidates.len(),
            moves.first().map(|m| m.score)
        );
        moves
    }
}

/// Check that all words on `board` are in `dictionary`.
/// ## Errors
/// Returns an [`InvalidWord`](Error::InvalidWord) error for each word not in the dictionary.
pub fn validate(dictionary: &Dictionary, board: &Board) -> Result<(), Vec<Error>> {
    let errors: Vec<Error> = board
        .get_board_words()
        .into_iter()
        .filter(|word| !dictionary.contains(&word.letters()))
        .map(|word| Error::InvalidWord(word.to_string()))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Find all moves for `rack` on `board`, with the best move first.
/// ## Errors
/// If `board` holds words that are not in `dictionary`.
/// ## Examples
/// ```
/// use wwf_solver::{solve, Board, Dictionary, Rack, TileSet};
/// let tileset = TileSet::default();
/// let dictionary = Dictionary::from_words(&["rust", "rest"]);
/// let board = Board::default();
/// let rack = Rack::from_letters(&tileset, "rusta");
/// let moves = solve(&dictionary, &board, &rack)?;
/// assert!(!moves.is_empty());
/// assert_eq!(moves[0].word.letters(), "rust");
/// # Ok::<(), wwf_solver::Error>(())
/// ```
pub fn solve(dictionary: &Dictionary, board: &Board, rack: &Rack) -> Result<Vec<Move>, Error> {
    validate(dictionary, board).map_err(|errors| {
        let words = errors
            .into_iter()
            .filter_map(|error| match error {
                Error::InvalidWord(word) => Some(word),
                _ => None,
            })
            .collect();
        Error::InvalidBoard(words)
    })?;
    Ok(Game::new(dictionary, board, rack).get_scored_possible_words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Multiplier, Tile, TileSet};

    type Result<T> = std::result::Result<T, Error>;

    fn board_with_hi() -> Result<Board> {
        let mut board = Board::new(5, 5);
        board.play_word(&TileSet::default(), "hi", 2, 2, Direction::Vertical)?;
        Ok(board)
    }

    fn summary(m: &Move) -> (String, usize, usize, Direction, u32) {
        let (row, col, direction) = m.position();
        (m.word.letters(), row, col, direction, m.score)
    }

    #[test]
    fn test_find_words_for_series() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hi", "ho", "who", "thio"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "wo");
        let game = Game::new(&dictionary, &board, &rack);
        let series = board.get_series(2, 1, 2, Direction::Horizontal);
        let words = game.find_words_for_series(&series, &rack.counts());
        let letters: Vec<String> = words.iter().map(Word::letters).collect();
        assert_eq!(letters, vec!["who"]);
        // the h is the cell from the board
        assert_eq!(words[0].cells()[1], *board.get_cell(2, 2).unwrap());
        Ok(())
    }

    #[test]
    fn test_find_words_uses_each_tile_once() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hoo", "ho"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "o");
        let game = Game::new(&dictionary, &board, &rack);
        let series = board.get_series(2, 2, 2, Direction::Horizontal);
        assert_eq!(series.len(), 3);
        assert!(game.find_words_for_series(&series, &rack.counts()).is_empty());
        Ok(())
    }

    #[test]
    fn test_blank_scores_zero() -> Result<()> {
        let dictionary = Dictionary::from_words(&["thio"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "?o");
        let game = Game::new(&dictionary, &board, &rack);
        let series = board.get_series(1, 2, 2, Direction::Vertical);
        let words = game.find_words_for_series(&series, &rack.counts());
        assert_eq!(words.len(), 1);
        assert_eq!(
            words[0].cells()[0].tile(),
            Some(Tile::wildcard_from_letter('t'))
        );
        assert_eq!(words[0].score(), 6);
        Ok(())
    }

    #[test]
    fn test_get_scored_possible_words() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hi", "ho", "who", "thio"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "o");
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert_eq!(moves.len(), 1);
        assert_eq!(
            summary(&moves[0]),
            (String::from("ho"), 2, 2, Direction::Horizontal, 5)
        );
        assert_eq!(moves[0].placed(), 1);
        Ok(())
    }

    #[test]
    fn test_get_scored_possible_words_with_blank() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hi", "ho", "who", "thio"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "o?");
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        let summaries: Vec<_> = moves.iter().map(summary).collect();
        assert!(summaries.contains(&(String::from("thio"), 1, 2, Direction::Vertical, 6)));
        assert!(summaries.contains(&(String::from("ho"), 2, 2, Direction::Horizontal, 5)));
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
        Ok(())
    }

    #[test]
    fn test_crossing_words() -> Result<()> {
        let tileset = TileSet::default();
        let state = &[".....", ".....", "..h..", "..is.", "....."];
        let board = Board::new(5, 5).with_state_from_strings(&tileset, state)?;
        let rack = Rack::from_letters(&tileset, "o");

        // "ho" also forms "os" downwards
        let dictionary = Dictionary::from_words(&["hi", "is", "ho", "os"]);
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        let ho = moves
            .iter()
            .find(|m| m.word.letters() == "ho")
            .expect("ho is a valid move");
        let mut words: Vec<String> = ho.words.iter().map(Word::letters).collect();
        words.sort();
        assert_eq!(words, vec!["ho", "os"]);
        assert_eq!(ho.score, 5 + 2);

        let dictionary = Dictionary::from_words(&["hi", "is", "ho"]);
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert!(moves.iter().all(|m| m.word.letters() != "ho"));
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let tileset = TileSet::default();
        let dictionary = Dictionary::from_words(&["example"]);
        let board = Board::new(15, 15);
        let rack = Rack::from_letters(&tileset, "example");
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert_eq!(moves.len(), 1);
        let words_score: u32 = moves[0].words.iter().map(Word::score).sum();
        assert_eq!(words_score, 19);
        assert_eq!(moves[0].score, words_score + BINGO_BONUS);
        assert_eq!(moves[0].placed(), 7);
        Ok(())
    }

    #[test]
    fn test_no_bingo_for_short_rack() -> Result<()> {
        let tileset = TileSet::default();
        let dictionary = Dictionary::from_words(&["cat"]);
        let board = Board::new(15, 15);
        let rack = Rack::from_letters(&tileset, "cat");
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].score, 4 + 1 + 1);
        Ok(())
    }

    #[test]
    fn test_center_word_bonus() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat"]);
        let rack = Rack::new(vec![
            Tile::new('c', 3),
            Tile::new('a', 1),
            Tile::new('t', 1),
        ]);
        let board = Board::new(15, 15);
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert_eq!(moves[0].score, 5);

        let mut cells = board.cells().to_vec();
        cells[7][7] = cells[7][7].with_multiplier(Some(Multiplier::DW));
        let board = Board::from_cells(cells)?;
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert_eq!(moves[0].score, 10);
        Ok(())
    }

    #[test]
    fn test_empty_board_moves_cover_center() -> Result<()> {
        let tileset = TileSet::default();
        let dictionary = Dictionary::from_words(&["hi", "ho", "oh", "hit", "hot"]);
        let board = Board::new(5, 5);
        let rack = Rack::from_letters(&tileset, "hoti");
        let moves = Game::new(&dictionary, &board, &rack).get_scored_possible_words();
        assert!(!moves.is_empty());
        for m in &moves {
            assert!(board.word_intersects_center(&m.word), "{}", m);
        }
        Ok(())
    }

    #[test]
    fn test_empty_rack() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hi", "ho"]);
        let board = board_with_hi()?;
        let rack = Rack::default();
        assert!(solve(&dictionary, &board, &rack)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_deadline() -> Result<()> {
        let dictionary = Dictionary::from_words(&["hi", "ho", "who", "thio"]);
        let board = board_with_hi()?;
        let rack = Rack::from_letters(&TileSet::default(), "o?");
        let game = Game::new(&dictionary, &board, &rack).with_deadline(Duration::from_secs(0));
        assert!(game.get_scored_possible_words().is_empty());
        Ok(())
    }

    #[test]
    fn test_non_ascii_tiles() -> Result<()> {
        let mut cells = Board::new(3, 3).cells().to_vec();
        for (col, letter) in "ÉTÉ".chars().enumerate() {
            cells[1][col] = cells[1][col].with_tile(Tile::new(letter, 1));
        }
        let board = Board::from_cells(cells)?;
        let dictionary = Dictionary::from_words(&["Été", "étés"]);
        assert!(validate(&dictionary, &board).is_ok());

        // a word through the uppercase tiles is still found and scored
        let dictionary = Dictionary::from_words(&["été", "té"]);
        let rack = Rack::new(vec![Tile::new('t', 1)]);
        let moves = solve(&dictionary, &board, &rack)?;
        let found: Vec<_> = moves.iter().map(summary).collect();
        assert!(found.contains(&(String::from("té"), 0, 0, Direction::Vertical, 2)));
        Ok(())
    }

    #[test]
    fn test_validate() -> Result<()> {
        let tileset = TileSet::default();
        let state = &[".....", ".....", "..h..", "..iq.", "....."];
        let board = Board::new(5, 5).with_state_from_strings(&tileset, state)?;
        let dictionary = Dictionary::from_words(&["hi"]);
        let errors = validate(&dictionary, &board).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], Error::InvalidWord(word) if word == "iq"));

        let rack = Rack::from_letters(&tileset, "o");
        let result = solve(&dictionary, &board, &rack);
        assert!(matches!(result, Err(Error::InvalidBoard(words)) if words == vec!["iq"]));
        assert!(validate(&dictionary, &board_with_hi()?).is_ok());
        Ok(())
    }
}
