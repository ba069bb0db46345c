// src/segment/accumulator.rs
use crate::types::SegmentType;
use bytes::Bytes;
use std::collections::HashMap;

/// Payload bytes collected by the eager scan, grouped by segment type.
///
/// A single image may contain several segments of the same type (multiple
/// APP1 blocks, multiple comments); blocks are kept in stream order per type.
/// The accumulator is populated by [`SegmentCollector`](crate::SegmentCollector)
/// and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SegmentAccumulator {
    blocks: HashMap<SegmentType, Vec<Bytes>>,
}

impl SegmentAccumulator {
    pub(crate) fn new() -> Self {
        SegmentAccumulator {
            blocks: HashMap::new(),
        }
    }

    pub(crate) fn push(&mut self, segment_type: SegmentType, payload: Bytes) {
        self.blocks.entry(segment_type).or_default().push(payload);
    }

    /// All payload blocks of the given type, in stream order.
    pub fn blocks(&self, segment_type: SegmentType) -> &[Bytes] {
        self.blocks
            .get(&segment_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first payload block of the given type, if any.
    pub fn first(&self, segment_type: SegmentType) -> Option<&Bytes> {
        self.blocks(segment_type).first()
    }

    /// Check whether any block of the given type was retained.
    pub fn contains(&self, segment_type: SegmentType) -> bool {
        self.blocks.contains_key(&segment_type)
    }

    /// Segment types with at least one retained block.
    pub fn types(&self) -> impl Iterator<Item = SegmentType> + '_ {
        self.blocks.keys().copied()
    }

    /// Total number of retained blocks across all types.
    pub fn block_count(&self) -> usize {
        self.blocks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
