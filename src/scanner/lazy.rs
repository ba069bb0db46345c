// src/scanner/lazy.rs
use crate::classify::PreambleClassifier;
use crate::error::Result;
use crate::scanner::{expect_soi, next_marker, read_up_to};
use crate::segment::SegmentDescriptor;
use byteorder::{BigEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Lazy segment scanner over a seekable source.
///
/// Yields one [`SegmentDescriptor`] per recognized marker, in stream order,
/// without materializing payload bytes: each payload is skipped by seeking
/// past its declared length. Payload-bearing segments are classified by
/// peeking at their preamble; the peek never moves where the next segment is
/// read from.
///
/// The sequence ends cleanly at end-of-data (truncation is expected when
/// exploring) and after a descriptor whose declared length is below the
/// 2-byte minimum. Only genuine source I/O failures are yielded as errors.
/// The iterator is fused: once it returns `None` it stays finished.
///
/// Note that SOS and EOI are reported like any other payload-free segment
/// and do not stop the scan, so entropy-coded scan data following SOS is
/// read as if it contained markers. Downstream diagnostic tooling relies on
/// seeing those raw bytes reported as-is.
///
/// # Example
///
/// ```no_run
/// use jpeg_segments::SegmentScanner;
///
/// let scanner = SegmentScanner::open("photo.jpg").unwrap();
/// for descriptor in scanner {
///     let descriptor = descriptor.unwrap();
///     println!(
///         "{:?} at offset {} ({} bytes declared)",
///         descriptor.segment_type, descriptor.offset, descriptor.length
///     );
/// }
/// ```
pub struct SegmentScanner<R: ReadSeek> {
    source: R,
    classifier: PreambleClassifier,
    done: bool,
}

/// Constructor for standard file I/O
impl SegmentScanner<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        SegmentScanner::new(BufReader::with_capacity(65536, file))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl SegmentScanner<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        SegmentScanner::new(Cursor::new(mmap))
    }
}

impl<R: ReadSeek> SegmentScanner<R> {
    /// Wrap a seekable source positioned at the start of a JPEG stream.
    ///
    /// Fails with [`MalformedHeader`](crate::ScanError::MalformedHeader) if
    /// the first two bytes are not the start-of-image marker, before any
    /// descriptor is produced.
    pub fn new(mut source: R) -> Result<Self> {
        expect_soi(&mut source)?;
        Ok(SegmentScanner {
            source,
            classifier: PreambleClassifier::new(),
            done: false,
        })
    }

    /// Current byte position in the underlying source.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.source.stream_position()?)
    }

    /// Give the source back once iteration is finished.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn next_descriptor(&mut self) -> Result<Option<SegmentDescriptor>> {
        let sync = match next_marker(&mut self.source)? {
            Some(sync) => sync,
            // Running out of bytes mid-resync ends an exploratory scan.
            None => return Ok(None),
        };

        // Two bytes behind the cursor: the 0xFF and the type byte.
        let offset = self.source.stream_position()? - 2;

        if !sync.segment_type.has_payload() {
            return Ok(Some(SegmentDescriptor {
                segment_type: sync.segment_type,
                length: 0,
                padding: sync.padding,
                offset,
                label: None,
            }));
        }

        let declared = match self.source.read_u16::<BigEndian>() {
            Ok(value) => value,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if declared < 2 {
            // Yield the offending descriptor, then stop: a length that cannot
            // even cover its own field leaves no way to stay synchronized.
            self.done = true;
            return Ok(Some(SegmentDescriptor {
                segment_type: sync.segment_type,
                length: declared,
                padding: sync.padding,
                offset,
                label: None,
            }));
        }

        let payload_len = u64::from(declared) - 2;
        let payload_start = self.source.stream_position()?;

        let label = if payload_len > 0 {
            let peek_len = payload_len.min(self.classifier.max_depth() as u64) as usize;
            let mut preamble = vec![0u8; peek_len];
            let got = read_up_to(&mut self.source, &mut preamble)?;
            self.classifier.classify(&preamble[..got])
        } else {
            None
        };

        // The peek must not shift segment boundaries: land exactly at the
        // end of the declared payload no matter how much was peeked.
        self.source
            .seek(SeekFrom::Start(payload_start + payload_len))?;

        Ok(Some(SegmentDescriptor {
            segment_type: sync.segment_type,
            length: declared,
            padding: sync.padding,
            offset,
            label,
        }))
    }
}

impl<R: ReadSeek> Iterator for SegmentScanner<R> {
    type Item = Result<SegmentDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_descriptor() {
            Ok(Some(descriptor)) => Some(Ok(descriptor)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
