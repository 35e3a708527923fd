/// An ordered tree to manage a set of keys. It can answer whether it contains a given key or not.
///
/// Keys are any values that can be converted to a slice of alphabets (type `T`).
/// The code for `TrieVec` is borrowed from the [`louds`](https://github.com/ajalab/louds) crate.
pub trait Trie<T> {
    /// Returns `true` if the trie contains `key`.
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool;
}

/// Naive trie implementation supporting dynamic insertion.
/// The children of each node are kept sorted, so lookup is a binary search.
#[derive(Debug, Default, Clone)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    /// Number of nodes below and including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Insert `key`. Returns `false` if the key was already present.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let inserted = !t.terminal;
        t.terminal = true;
        inserted
    }
}

impl<T: Ord> Trie<T> for TrieVec<T> {
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => {
                    t = &t.children[pos].1;
                }
                Err(_) => {
                    return false;
                }
            }
        }
        t.terminal
    }
}
