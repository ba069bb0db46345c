// src/classify/trie.rs
use smallvec::SmallVec;

/// A byte-keyed prefix trie.
///
/// Lookup returns the value stored at the deepest inserted key that lies on
/// the walked path, so longer keys take priority over shorter keys that are
/// prefixes of them. A value set with [`set_default`](ByteTrie::set_default)
/// lives at the root and is returned when nothing deeper matches.
///
/// Child edges are kept in a sorted small-vector per node; the known key sets
/// this serves are small and static, so lookups stay allocation-free.
#[derive(Debug, Clone)]
pub struct ByteTrie<V> {
    root: Node<V>,
    max_depth: usize,
}

#[derive(Debug, Clone)]
struct Node<V> {
    value: Option<V>,
    children: SmallVec<[(u8, Box<Node<V>>); 4]>,
}

impl<V> Node<V> {
    fn empty() -> Self {
        Node {
            value: None,
            children: SmallVec::new(),
        }
    }

    fn child(&self, byte: u8) -> Option<&Node<V>> {
        self.children
            .binary_search_by_key(&byte, |(b, _)| *b)
            .ok()
            .map(|idx| &*self.children[idx].1)
    }
}

impl<V> ByteTrie<V> {
    pub fn new() -> Self {
        ByteTrie {
            root: Node::empty(),
            max_depth: 0,
        }
    }

    /// Store `value` at the end of `key`, replacing any previous value there.
    pub fn insert(&mut self, key: &[u8], value: V) {
        let mut node = &mut self.root;
        for &byte in key {
            let idx = match node.children.binary_search_by_key(&byte, |(b, _)| *b) {
                Ok(idx) => idx,
                Err(idx) => {
                    node.children.insert(idx, (byte, Box::new(Node::empty())));
                    idx
                }
            };
            node = &mut *node.children[idx].1;
        }
        node.value = Some(value);
        self.max_depth = self.max_depth.max(key.len());
    }

    /// Set the value returned when a lookup matches no inserted key.
    pub fn set_default(&mut self, value: V) {
        self.root.value = Some(value);
    }

    /// Find the value at the deepest inserted key lying on `prefix`'s path.
    ///
    /// The walk stops at the first byte with no matching child or when the
    /// input runs out, whichever comes first.
    pub fn lookup(&self, prefix: &[u8]) -> Option<&V> {
        let mut node = &self.root;
        let mut best = node.value.as_ref();
        for &byte in prefix {
            match node.child(byte) {
                Some(child) => {
                    node = child;
                    if let Some(value) = node.value.as_ref() {
                        best = Some(value);
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Length of the longest inserted key.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<V> Default for ByteTrie<V> {
    fn default() -> Self {
        ByteTrie::new()
    }
}
