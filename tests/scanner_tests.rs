// tests/scanner_tests.rs
use jpeg_segments::*;
use std::io::{Cursor, Write};

/// Build a payload-bearing segment: marker + length field + payload.
fn segment(type_byte: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, type_byte];
    out.extend_from_slice(&((payload.len() as u16) + 2).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

fn minimal_image() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x04, 0xAA, 0xBB, 0xFF, 0xD9]
}

#[test]
fn test_minimal_image_lazy_descriptors() {
    let descriptors: Vec<SegmentDescriptor> = SegmentScanner::new(Cursor::new(minimal_image()))
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].segment_type, SegmentType::Sof0);
    assert_eq!(descriptors[0].length, 4);
    assert_eq!(descriptors[0].padding, 0);
    assert_eq!(descriptors[0].offset, 2);
    assert_eq!(descriptors[1].segment_type, SegmentType::Eoi);
    assert_eq!(descriptors[1].length, 0);
}

#[test]
fn test_minimal_image_eager_accumulation() {
    // Not a type of interest: empty accumulator, scan still reaches EOI.
    let empty = SegmentCollector::retaining([SegmentType::App1])
        .collect(Cursor::new(minimal_image()))
        .unwrap();
    assert!(empty.is_empty());

    let full = SegmentCollector::retaining([SegmentType::Sof0])
        .collect(Cursor::new(minimal_image()))
        .unwrap();
    assert_eq!(&full.blocks(SegmentType::Sof0)[0][..], &[0xAA, 0xBB]);
}

#[test]
fn test_mid_stream_fill_bytes_are_padding() {
    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&[0xFF, 0xFF, 0xFF]); // three extra fill bytes
    image.extend_from_slice(&segment(0xE0, b"JFIF\x00rest"));
    image.extend_from_slice(&[0xFF, 0xD9]);

    let descriptors: Vec<SegmentDescriptor> = SegmentScanner::new(Cursor::new(image))
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(descriptors[0].segment_type, SegmentType::App0);
    assert_eq!(descriptors[0].padding, 3);
    assert_eq!(descriptors[0].label, Some("JFIF"));
    assert_eq!(descriptors[1].padding, 0);
}

#[test]
fn test_header_rejection_both_modes() {
    let not_jpeg = b"\x89PNG\r\n\x1a\n".to_vec();

    match SegmentScanner::new(Cursor::new(not_jpeg.clone())) {
        Err(ScanError::MalformedHeader { found }) => assert_eq!(found, [0x89, b'P']),
        other => panic!("expected MalformedHeader, got {:?}", other.map(|_| ())),
    }

    match SegmentCollector::all().collect(Cursor::new(not_jpeg)) {
        Err(ScanError::MalformedHeader { found }) => assert_eq!(found, [0x89, b'P']),
        other => panic!("expected MalformedHeader, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_length_modes_disagree() {
    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x01]); // true payload size -1
    image.extend_from_slice(&[0xFF, 0xD9]);

    // Lazy: the malformed descriptor is yielded, then the sequence ends.
    let mut scanner = SegmentScanner::new(Cursor::new(image.clone())).unwrap();
    let malformed = scanner.next().unwrap().unwrap();
    assert_eq!(malformed.segment_type, SegmentType::App1);
    assert_eq!(malformed.length, 1);
    assert!(scanner.next().is_none());

    // Eager: fatal.
    assert!(matches!(
        SegmentCollector::all().collect(Cursor::new(image)),
        Err(ScanError::InvalidSegmentLength { declared: 1, .. })
    ));
}

#[test]
fn test_minimum_raw_length_two_is_accepted() {
    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&segment(0xFE, b""));
    image.extend_from_slice(&[0xFF, 0xD9]);

    let acc = SegmentCollector::all().collect(Cursor::new(image)).unwrap();
    let blocks = acc.blocks(SegmentType::Com);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_empty());
}

#[test]
fn test_selective_retention_byte_identity() {
    let app1_first = b"Exif\x00\x00II*\x00\x08\x00\x00\x00";
    let app1_second = b"http://ns.adobe.com/xap/1.0/\x00<x:xmpmeta/>";
    let app2 = b"ICC_PROFILE\x00\x01\x01profile-bytes";

    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&segment(0xE1, app1_first));
    image.extend_from_slice(&segment(0xE2, app2));
    image.extend_from_slice(&segment(0xE1, app1_second));
    image.extend_from_slice(&[0xFF, 0xD9]);

    let full = SegmentCollector::all().collect(Cursor::new(image.clone())).unwrap();
    let only_app1 = SegmentCollector::retaining([SegmentType::App1])
        .collect(Cursor::new(image))
        .unwrap();

    // Only APP1 retained, byte-for-byte identical to the full scan's blocks,
    // and the skipped APP2 did not desynchronize the second APP1.
    assert!(!only_app1.contains(SegmentType::App2));
    assert_eq!(
        only_app1.blocks(SegmentType::App1),
        full.blocks(SegmentType::App1)
    );
    assert_eq!(only_app1.blocks(SegmentType::App1).len(), 2);
    assert_eq!(&only_app1.blocks(SegmentType::App1)[1][..], app1_second);
}

#[test]
fn test_lazy_scan_labels_known_app_segments() {
    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&segment(0xE0, b"JFIF\x00\x01\x02"));
    image.extend_from_slice(&segment(0xE1, b"Exif\x00\x00MM\x00\x2A"));
    image.extend_from_slice(&segment(0xED, b"Photoshop 3.0\x008BIM"));
    image.extend_from_slice(&segment(0xEE, b"Adobe\x64\x00"));
    image.extend_from_slice(&segment(0xE5, b"NoSuchVendor"));
    image.extend_from_slice(&[0xFF, 0xD9]);

    let labels: Vec<Option<&'static str>> = SegmentScanner::new(Cursor::new(image))
        .unwrap()
        .map(|d| d.unwrap().label)
        .collect();

    assert_eq!(
        labels,
        vec![
            Some("JFIF"),
            Some("Exif"),
            Some("Photoshop"),
            Some("Adobe"),
            None,
            None, // EOI
        ]
    );
}

#[test]
fn test_file_backed_scan() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut image = vec![0xFF, 0xD8];
    image.extend_from_slice(&segment(0xE1, b"Exif\x00\x00II*\x00"));
    image.extend_from_slice(&[0xFF, 0xD9]);
    file.write_all(&image).unwrap();
    file.flush().unwrap();

    let descriptors: Vec<SegmentDescriptor> = SegmentScanner::open(file.path())
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].label, Some("Exif"));

    let acc = SegmentCollector::retaining([SegmentType::App1])
        .collect_from_path(file.path())
        .unwrap();
    assert_eq!(&acc.blocks(SegmentType::App1)[0][..6], b"Exif\x00\x00");
}

#[cfg(feature = "mmap")]
#[test]
fn test_mmap_backed_scan() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&minimal_image()).unwrap();
    file.flush().unwrap();

    let descriptors: Vec<SegmentDescriptor> = SegmentScanner::open_mmap(file.path())
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(descriptors.len(), 2);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_padding_and_offsets_reported_exactly(
            pad in 0usize..64,
            payload in proptest::collection::vec(any::<u8>(), 0..200),
        ) {
            let mut image = vec![0xFF, 0xD8];
            image.extend(std::iter::repeat(0xFF).take(pad));
            image.extend_from_slice(&segment(0xFE, &payload));
            image.extend_from_slice(&[0xFF, 0xD9]);

            let descriptors: Vec<SegmentDescriptor> =
                SegmentScanner::new(Cursor::new(image))
                    .unwrap()
                    .collect::<Result<_>>()
                    .unwrap();

            prop_assert_eq!(descriptors.len(), 2);
            prop_assert_eq!(descriptors[0].segment_type, SegmentType::Com);
            prop_assert_eq!(descriptors[0].padding, pad as u64);
            prop_assert_eq!(descriptors[0].offset, 2 + pad as u64);
            prop_assert_eq!(descriptors[0].length, payload.len() as u16 + 2);
            prop_assert_eq!(
                descriptors[1].offset,
                2 + pad as u64 + 4 + payload.len() as u64
            );
        }

        #[test]
        fn prop_eager_round_trips_payload_bytes(
            payload in proptest::collection::vec(any::<u8>(), 0..200),
        ) {
            let mut image = vec![0xFF, 0xD8];
            image.extend_from_slice(&segment(0xEC, &payload));
            image.extend_from_slice(&[0xFF, 0xD9]);

            let acc = SegmentCollector::all().collect(Cursor::new(image)).unwrap();
            prop_assert_eq!(&acc.blocks(SegmentType::App12)[0][..], &payload[..]);
        }
    }
}
