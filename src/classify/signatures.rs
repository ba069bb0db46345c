// src/classify/signatures.rs
use crate::classify::ByteTrie;

/// Known APPn preamble signatures. Each is the ASCII identifier an encoder
/// writes at the start of the segment payload, terminator bytes included
/// where the convention defines them.
const SIGNATURES: &[(&str, &[u8])] = &[
    ("JFIF", b"JFIF\x00"),
    ("JFXX", b"JFXX\x00"),
    ("Exif", b"Exif\x00\x00"),
    ("XMP", b"http://ns.adobe.com/xap/1.0/\x00"),
    ("ExtendedXMP", b"http://ns.adobe.com/xmp/extension/\x00"),
    ("ICC Profile", b"ICC_PROFILE\x00"),
    ("MPF", b"MPF\x00"),
    ("Ducky", b"Ducky"),
    ("Photoshop", b"Photoshop 3.0\x00"),
    ("Adobe", b"Adobe"),
];

/// Classifies APPn segments by the signature bytes at the start of their
/// payload.
///
/// Built once from the fixed signature table; lookups are allocation-free.
/// The scanner peeks at most [`max_depth`](PreambleClassifier::max_depth)
/// payload bytes and hands them to [`classify`](PreambleClassifier::classify).
#[derive(Debug, Clone)]
pub struct PreambleClassifier {
    trie: ByteTrie<&'static str>,
}

impl PreambleClassifier {
    pub fn new() -> Self {
        let mut trie = ByteTrie::new();
        for (label, signature) in SIGNATURES {
            trie.insert(signature, *label);
        }
        PreambleClassifier { trie }
    }

    /// Label of the known convention whose signature prefixes `preamble`,
    /// or `None` if no signature matches.
    pub fn classify(&self, preamble: &[u8]) -> Option<&'static str> {
        self.trie.lookup(preamble).copied()
    }

    /// Number of preamble bytes worth peeking: the longest signature length.
    pub fn max_depth(&self) -> usize {
        self.trie.max_depth()
    }
}

impl Default for PreambleClassifier {
    fn default() -> Self {
        PreambleClassifier::new()
    }
}
