// src/lib.rs
//! # jpeg-segments
//!
//! A Rust library for scanning JPEG byte streams into their constituent
//! marker segments, with signature-based classification of application
//! (APPn) segments: Exif, XMP, ICC profiles, Photoshop resources, Adobe, and
//! friends.
//!
//! ## Features
//!
//! - 🔎 **Lazy scanning**: iterate segment descriptors over a seekable
//!   source without materializing payloads
//! - 📦 **Eager accumulation**: collect raw payload bytes per segment type
//!   from a sequential source, with selective retention
//! - 🏷️ **Preamble classification**: byte-trie lookup of known APPn
//!   signatures
//! - 🧱 **Robust framing**: tolerates fill-byte runs of any length and
//!   truncated tails
//! - 🎯 **Type safe**: closed marker-code enumeration with per-variant
//!   payload facts
//!
//! This crate deliberately stops at segment boundaries: it does not decode
//! Exif tag tables, XMP documents, ICC profile internals, or pixel data, and
//! it never mutates or re-encodes the stream.
//!
//! ## Quick Start
//!
//! ### Lazy descriptor scan
//!
//! ```rust,no_run
//! use jpeg_segments::*;
//!
//! fn main() -> Result<()> {
//!     let scanner = SegmentScanner::open("photo.jpg")?;
//!
//!     for descriptor in scanner {
//!         let descriptor = descriptor?;
//!         println!(
//!             "{:?} offset={} length={} label={:?}",
//!             descriptor.segment_type, descriptor.offset, descriptor.length, descriptor.label
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Eager payload accumulation
//!
//! ```rust,no_run
//! use jpeg_segments::*;
//!
//! fn main() -> Result<()> {
//!     let accumulator = SegmentCollector::retaining([SegmentType::App1, SegmentType::App2])
//!         .collect_from_path("photo.jpg")?;
//!
//!     for block in accumulator.blocks(SegmentType::App1) {
//!         println!("APP1 block: {} bytes", block.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Modules
pub mod classify;
pub mod error;
pub mod scanner;
pub mod segment;
pub mod types;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, ScanError};

// Type exports
pub use types::{markers, SegmentType, MARKER_START};

// Segment exports
pub use segment::{SegmentAccumulator, SegmentDescriptor};

// Scanner exports
pub use scanner::{ReadSeek, SegmentCollector, SegmentScanner};

// Classifier exports
pub use classify::{ByteTrie, PreambleClassifier};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use jpeg_segments::prelude::*;
    //! ```

    pub use crate::classify::PreambleClassifier;
    pub use crate::error::{Result, ScanError};
    pub use crate::scanner::{SegmentCollector, SegmentScanner};
    pub use crate::segment::{SegmentAccumulator, SegmentDescriptor};
    pub use crate::types::SegmentType;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
