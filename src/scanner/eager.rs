// src/scanner/eager.rs
use crate::error::{Result, ScanError};
use crate::scanner::{expect_soi, next_marker, skip_exact};
use crate::segment::SegmentAccumulator;
use crate::types::SegmentType;
use byteorder::{BigEndian, ReadBytesExt};
use bytes::Bytes;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Eager segment collector over a sequential source.
///
/// Reads every segment up to the first SOS or EOI marker and retains full
/// payload bytes, grouped by type in a [`SegmentAccumulator`]. The scan never
/// searches past SOS: entropy-coded data cannot be walked with marker
/// framing, so SOS is the stop condition and SOS/EOI themselves are not
/// accumulated.
///
/// The collector carries the retention policy: [`all`](SegmentCollector::all)
/// keeps every payload-bearing segment, [`retaining`](SegmentCollector::retaining)
/// keeps only the given types while still skipping the others by their
/// declared length to stay synchronized.
///
/// Unlike the lazy scanner, this mode requires every declared marker to be
/// complete: truncation during marker resync, the length field, or a retained
/// payload is a hard error. Truncation while skipping an uninteresting
/// payload ends the scan early with whatever was accumulated.
///
/// # Example
///
/// ```no_run
/// use jpeg_segments::{SegmentCollector, SegmentType};
///
/// let accumulator = SegmentCollector::retaining([SegmentType::App1])
///     .collect_from_path("photo.jpg")
///     .unwrap();
/// for block in accumulator.blocks(SegmentType::App1) {
///     println!("APP1 block of {} bytes", block.len());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentCollector {
    interest: Option<HashSet<SegmentType>>,
}

impl SegmentCollector {
    /// Retain every payload-bearing segment.
    pub fn all() -> Self {
        SegmentCollector { interest: None }
    }

    /// Retain only the given segment types; others are skipped unread.
    pub fn retaining<I>(types: I) -> Self
    where
        I: IntoIterator<Item = SegmentType>,
    {
        SegmentCollector {
            interest: Some(types.into_iter().collect()),
        }
    }

    fn wants(&self, segment_type: SegmentType) -> bool {
        match &self.interest {
            Some(set) => set.contains(&segment_type),
            None => true,
        }
    }

    /// Scan `source` and return the accumulated payloads.
    pub fn collect<R: Read>(&self, mut source: R) -> Result<SegmentAccumulator> {
        expect_soi(&mut source)?;

        let mut accumulator = SegmentAccumulator::new();
        // Sequential sources have no position query; count consumed bytes
        // for error reporting.
        let mut offset: u64 = 2;

        loop {
            let sync = match next_marker(&mut source)? {
                Some(sync) => sync,
                None => return Err(ScanError::TruncatedStream { offset }),
            };
            offset += sync.padding + 2;
            let marker_offset = offset - 2;
            let segment_type = sync.segment_type;

            if segment_type == SegmentType::Sos || segment_type == SegmentType::Eoi {
                return Ok(accumulator);
            }
            if !segment_type.has_payload() {
                continue;
            }

            let declared = match source.read_u16::<BigEndian>() {
                Ok(value) => value,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(ScanError::TruncatedStream { offset });
                }
                Err(e) => return Err(e.into()),
            };
            if declared < 2 {
                return Err(ScanError::InvalidSegmentLength {
                    segment_type,
                    declared,
                    offset: marker_offset,
                });
            }
            offset += 2;
            let payload_len = usize::from(declared - 2);

            if self.wants(segment_type) {
                let mut payload = vec![0u8; payload_len];
                match source.read_exact(&mut payload) {
                    Ok(()) => accumulator.push(segment_type, Bytes::from(payload)),
                    Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                        return Err(ScanError::TruncatedStream { offset });
                    }
                    Err(e) => return Err(e.into()),
                }
            } else if !skip_exact(&mut source, payload_len)? {
                // Could not even skip the payload: the stream ends inside a
                // segment nobody asked for, so return what we have.
                return Ok(accumulator);
            }
            offset += payload_len as u64;
        }
    }

    /// Convenience wrapper opening a file with buffered I/O.
    pub fn collect_from_path(&self, path: impl AsRef<Path>) -> Result<SegmentAccumulator> {
        let file = File::open(path)?;
        self.collect(BufReader::with_capacity(65536, file))
    }
}
