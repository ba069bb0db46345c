// src/scanner/mod.rs
//! Marker synchronization shared by both scan policies.
//!
//! The lazy descriptor iterator and the eager payload collector are the same
//! algorithm under two policies (skip-payload vs retain-payload, stop vs fail
//! on a bad length). The marker-sync state machine lives here so the two
//! adapters cannot drift apart.

mod eager;
mod lazy;

pub use eager::SegmentCollector;
pub use lazy::{ReadSeek, SegmentScanner};

use crate::error::{Result, ScanError};
use crate::types::{markers, SegmentType, MARKER_START};
use byteorder::ReadBytesExt;
use std::io::{self, ErrorKind, Read};

/// A recognized marker: its segment type and the fill bytes skipped to
/// reach it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkerSync {
    pub segment_type: SegmentType,
    pub padding: u64,
}

/// Consume the two-byte start-of-image header or fail with `MalformedHeader`
/// carrying whatever was actually read.
pub(crate) fn expect_soi<R: Read>(source: &mut R) -> Result<()> {
    let mut found = [0u8; 2];
    let mut filled = 0;
    while filled < 2 {
        let n = source.read(&mut found[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    if found != markers::SOI {
        return Err(ScanError::MalformedHeader { found });
    }
    Ok(())
}

/// Advance to the next marker: a run of fill bytes, one 0xFF, one type byte
/// that is neither 0x00 nor 0xFF.
///
/// Returns `Ok(None)` on end-of-data during resynchronization; the two scan
/// policies disagree on whether that is an error, so the decision is theirs.
pub(crate) fn next_marker<R: Read>(source: &mut R) -> io::Result<Option<MarkerSync>> {
    let mut first = match read_byte(source)? {
        Some(byte) => byte,
        None => return Ok(None),
    };
    let mut second = match read_byte(source)? {
        Some(byte) => byte,
        None => return Ok(None),
    };

    let mut padding = 0u64;
    loop {
        if first == MARKER_START {
            // from_byte rejects exactly the two bytes that cannot end a
            // marker: 0x00 stuffing and another fill byte.
            if let Some(segment_type) = SegmentType::from_byte(second) {
                return Ok(Some(MarkerSync {
                    segment_type,
                    padding,
                }));
            }
        }
        padding += 1;
        first = second;
        second = match read_byte(source)? {
            Some(byte) => byte,
            None => return Ok(None),
        };
    }
}

/// Read one byte, mapping end-of-data to `None` instead of an error.
fn read_byte<R: Read>(source: &mut R) -> io::Result<Option<u8>> {
    match source.read_u8() {
        Ok(byte) => Ok(Some(byte)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Fill `buf` as far as the source allows; returns the number of bytes read.
/// Unlike `read_exact`, a short read is reported, not an error.
pub(crate) fn read_up_to<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = source.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Discard exactly `count` bytes. Returns `Ok(false)` if the source ended
/// first.
pub(crate) fn skip_exact<R: Read>(source: &mut R, mut count: usize) -> io::Result<bool> {
    let mut scratch = [0u8; 4096];
    while count > 0 {
        let want = count.min(scratch.len());
        let n = source.read(&mut scratch[..want])?;
        if n == 0 {
            return Ok(false);
        }
        count -= n;
    }
    Ok(true)
}
