mod trievec;

use self::trievec::{Trie, TrieVec};
use crate::tiles::to_lower;
use crate::Error;
use dashmap::DashMap;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::fs::read_to_string;
use std::sync::Arc;

/// Pattern character that matches any letter.
pub const ANY: char = '-';

/// Words matching a pattern, shared between callers of [`search_with_pattern`](Dictionary::search_with_pattern).
pub type Matches = Arc<Vec<String>>;

/// The list of valid words.
///
/// Words are kept in a trie for exact lookup, and in buckets by length for pattern search.
/// The results of pattern searches are cached, and the cache can be used from several threads
/// at the same time.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: TrieVec<char>,
    buckets: HashMap<usize, Vec<String>>,
    matches: DashMap<String, Matches>,
    word_count: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words from '{}'>",
            self.word_count, self.wordfile
        )
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let mut dictionary = Dictionary::new();
        read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .map(str::trim)
            .for_each(|word| dictionary.insert(word));
        dictionary.wordfile = String::from(wordfile);
        info!(
            "loaded {} words, {} trie nodes from {}",
            dictionary.word_count,
            dictionary.trie.node_count(),
            wordfile
        );
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Example
    /// ```
    /// use wwf_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["hi", "HO", "who"]);
    /// assert!(dictionary.contains("ho"));
    /// assert!(dictionary.contains("Who"));
    /// assert!(!dictionary.contains("wh"));
    /// ```
    pub fn from_words(words: &[&str]) -> Dictionary {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Add `word`. Words are stored in lowercase; empty words and duplicates are ignored.
    pub fn insert(&mut self, word: &str) {
        let chars = normalize(word.trim());
        if chars.is_empty() {
            return;
        }
        if self.trie.insert(&chars) {
            let word: String = chars.iter().collect();
            self.word_count += 1;
            self.buckets.entry(chars.len()).or_default().push(word);
            self.matches.clear();
        }
    }

    /// Returns true if `word` is in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.has(normalize(word))
    }

    /// The number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of patterns in the search cache.
    pub fn cached_patterns(&self) -> usize {
        self.matches.len()
    }

    /// Return all words that fit `pattern`, in the order they were added.
    ///
    /// `pattern` has a letter for each position that must match, and `-` for positions where
    /// any letter is accepted. Only words with the same length as the pattern match.
    /// Results are cached by pattern.
    /// ## Example
    /// ```
    /// use wwf_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["hi", "ho", "who", "thio"]);
    /// assert_eq!(*dictionary.search_with_pattern("h-"), vec!["hi", "ho"]);
    /// assert_eq!(*dictionary.search_with_pattern("-hi-"), vec!["thio"]);
    /// assert!(dictionary.search_with_pattern("x-").is_empty());
    /// ```
    pub fn search_with_pattern(&self, pattern: &str) -> Matches {
        let chars = normalize(pattern);
        let pattern: String = chars.iter().collect();
        if let Some(found) = self.matches.get(&pattern) {
            return Arc::clone(found.value());
        }
        let found: Vec<String> = self
            .buckets
            .get(&chars.len())
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|word| match_pattern(word, &chars))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        let found = Arc::new(found);
        self.matches.insert(pattern, Arc::clone(&found));
        found
    }
}

/// Lowercase the letters of `word`, the same way tiles are compared.
fn normalize(word: &str) -> Vec<char> {
    word.chars().map(to_lower).collect()
}

fn match_pattern(word: &str, pattern: &[char]) -> bool {
    word.chars()
        .zip(pattern)
        .all(|(w, &p)| p == ANY || w == p)
}
