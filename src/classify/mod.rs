// src/classify/mod.rs
mod signatures;
mod trie;

pub use signatures::PreambleClassifier;
pub use trie::ByteTrie;
