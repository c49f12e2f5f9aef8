#![warn(clippy::pedantic, clippy::nursery, clippy::unwrap_used, clippy::perf)]
#![deny(unused_must_use)]
#![deny(clippy::mod_module_files)]

//! Byte trie used for keyword lookups.
//!
//! Keys are raw bytes. Each node keeps its children in a small vector, which
//! is faster than hashing for the fan-out seen in keyword tables.

pub struct Trie<T> {
    root: TrieNode<T>,
    len: usize,
}

pub struct TrieNode<T> {
    next: Vec<(u8, Box<TrieNode<T>>)>,
    val: Option<T>,
}

/// Walks a trie one byte at a time. Once a byte has no edge, the walker
/// stays dead and [`TrieWalker::get_res`] returns `None`.
pub struct TrieWalker<'trie, T> {
    curr_node: Option<&'trie TrieNode<T>>,
}

impl<T> Trie<T> {
    pub const fn new() -> Self {
        Self { root: TrieNode::new(), len: 0 }
    }

    /// Stores `val` under `key`. If the key already holds a value, `merge`
    /// combines the stored value with `val` instead.
    pub fn insert_with(&mut self, key: &[u8], val: T, merge: impl FnOnce(&mut T, T)) -> &T {
        let mut node = &mut self.root;

        for ch in key {
            node = node.find_next_or_add(*ch);
        }

        match node.val {
            Some(ref mut old) => merge(old, val),
            None => {
                self.len += 1;
                node.val = Some(val);
            }
        }
        node.val.as_ref().expect("Just inserted")
    }

    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&T> {
        let mut walker = TrieWalker::new(self);
        for ch in key {
            walker.walk(*ch);
        }
        walker.get_res()
    }

    /// Number of keys holding a value.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'trie, T> TrieWalker<'trie, T> {
    pub const fn new(trie: &'trie Trie<T>) -> Self {
        Self { curr_node: Some(&trie.root) }
    }

    #[inline]
    pub fn walk(&mut self, ch: u8) {
        if let Some(n) = self.curr_node {
            self.curr_node = n.next.iter().find(|(c, _)| ch == *c).map(|(_, node)| node.as_ref());
        }
    }

    #[must_use]
    pub fn get_res(self) -> Option<&'trie T> {
        self.curr_node?.val.as_ref()
    }
}

impl<T> TrieNode<T> {
    const fn new() -> Self {
        Self { next: Vec::new(), val: None }
    }

    fn find_next_or_add(&mut self, ch: u8) -> &mut Self {
        if let Some(i) = self.next.iter().position(|(c, _)| ch == *c) {
            &mut self.next[i].1
        } else {
            self.next.push((ch, Box::new(Self::new())));
            &mut self.next.last_mut().expect("Just pushed").1
        }
    }
}
