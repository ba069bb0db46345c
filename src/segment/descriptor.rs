// src/segment/descriptor.rs
use crate::types::SegmentType;

/// One recognized marker segment, as reported by the lazy scanner.
///
/// The descriptor records where the segment sits in the stream, not its
/// payload bytes. `length` is the raw value of the 2-byte length field,
/// which counts itself; the true payload size is `length - 2`. Payload-free
/// types report a length of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDescriptor {
    pub segment_type: SegmentType,
    /// Raw declared length, including the 2 bytes of the field itself.
    pub length: u16,
    /// Fill bytes skipped before the marker was recognized.
    pub padding: u64,
    /// Byte offset of the marker start in the source.
    pub offset: u64,
    /// Preamble classification for payload-bearing segments, if any matched.
    pub label: Option<&'static str>,
}

impl SegmentDescriptor {
    /// True payload size in bytes, excluding the length field.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.length).saturating_sub(2)
    }
}
