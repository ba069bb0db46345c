// src/error.rs
use crate::types::SegmentType;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed header: expected FF D8, found {found:02X?}")]
    MalformedHeader { found: [u8; 2] },

    #[error("truncated stream at offset {offset}")]
    TruncatedStream { offset: u64 },

    #[error("invalid declared length {declared} for segment {segment_type:?} at offset {offset}")]
    InvalidSegmentLength {
        segment_type: SegmentType,
        declared: u16,
        offset: u64,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
