// src/types.rs
//! JPEG marker type codes and the facts the scanner needs about them.

/// Byte that introduces every marker, and also pads between segments.
pub const MARKER_START: u8 = 0xFF;

/// Two-byte marker constants, for collaborators that compare raw slices.
pub mod markers {
    /// Start Of Image
    pub const SOI: [u8; 2] = [0xFF, 0xD8];
    /// End Of Image
    pub const EOI: [u8; 2] = [0xFF, 0xD9];
    /// Start Of Scan
    pub const SOS: [u8; 2] = [0xFF, 0xDA];
}

/// JPEG segment type, one variant per marker code.
///
/// Every valid type byte (anything but `0x00` and `0xFF`) maps to exactly one
/// variant; codes in the reserved band `0x02..=0xBF` map to [`SegmentType::Res`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Temporary private use, 0x01
    Tem,
    /// Reserved marker codes 0x02..=0xBF
    Res(u8),
    /// Start of frame, baseline DCT
    Sof0,
    Sof1,
    /// Start of frame, progressive DCT
    Sof2,
    Sof3,
    /// Define Huffman tables
    Dht,
    Sof5,
    Sof6,
    Sof7,
    /// JPEG extensions
    Jpg,
    Sof9,
    Sof10,
    Sof11,
    /// Define arithmetic coding conditioning
    Dac,
    Sof13,
    Sof14,
    Sof15,
    /// Restart interval markers 0xD0..=0xD7
    Rst0,
    Rst1,
    Rst2,
    Rst3,
    Rst4,
    Rst5,
    Rst6,
    Rst7,
    /// Start of image
    Soi,
    /// End of image
    Eoi,
    /// Start of scan; entropy-coded data follows
    Sos,
    /// Define quantization tables
    Dqt,
    /// Define number of lines
    Dnl,
    /// Define restart interval
    Dri,
    /// Define hierarchical progression
    Dhp,
    /// Expand reference components
    Exp,
    App0,
    App1,
    App2,
    App3,
    App4,
    App5,
    App6,
    App7,
    App8,
    App9,
    App10,
    App11,
    App12,
    App13,
    App14,
    App15,
    /// JPEG extension markers 0xF0..=0xFD
    JpgExt(u8),
    /// Comment
    Com,
}

impl SegmentType {
    /// Map a marker type byte to its segment type.
    ///
    /// Returns `None` only for `0x00` (stuffing) and `0xFF` (fill), which are
    /// never valid type bytes.
    pub fn from_byte(code: u8) -> Option<Self> {
        match code {
            0x00 | 0xFF => None,
            0x01 => Some(SegmentType::Tem),
            0x02..=0xBF => Some(SegmentType::Res(code)),
            0xC0 => Some(SegmentType::Sof0),
            0xC1 => Some(SegmentType::Sof1),
            0xC2 => Some(SegmentType::Sof2),
            0xC3 => Some(SegmentType::Sof3),
            0xC4 => Some(SegmentType::Dht),
            0xC5 => Some(SegmentType::Sof5),
            0xC6 => Some(SegmentType::Sof6),
            0xC7 => Some(SegmentType::Sof7),
            0xC8 => Some(SegmentType::Jpg),
            0xC9 => Some(SegmentType::Sof9),
            0xCA => Some(SegmentType::Sof10),
            0xCB => Some(SegmentType::Sof11),
            0xCC => Some(SegmentType::Dac),
            0xCD => Some(SegmentType::Sof13),
            0xCE => Some(SegmentType::Sof14),
            0xCF => Some(SegmentType::Sof15),
            0xD0 => Some(SegmentType::Rst0),
            0xD1 => Some(SegmentType::Rst1),
            0xD2 => Some(SegmentType::Rst2),
            0xD3 => Some(SegmentType::Rst3),
            0xD4 => Some(SegmentType::Rst4),
            0xD5 => Some(SegmentType::Rst5),
            0xD6 => Some(SegmentType::Rst6),
            0xD7 => Some(SegmentType::Rst7),
            0xD8 => Some(SegmentType::Soi),
            0xD9 => Some(SegmentType::Eoi),
            0xDA => Some(SegmentType::Sos),
            0xDB => Some(SegmentType::Dqt),
            0xDC => Some(SegmentType::Dnl),
            0xDD => Some(SegmentType::Dri),
            0xDE => Some(SegmentType::Dhp),
            0xDF => Some(SegmentType::Exp),
            0xE0 => Some(SegmentType::App0),
            0xE1 => Some(SegmentType::App1),
            0xE2 => Some(SegmentType::App2),
            0xE3 => Some(SegmentType::App3),
            0xE4 => Some(SegmentType::App4),
            0xE5 => Some(SegmentType::App5),
            0xE6 => Some(SegmentType::App6),
            0xE7 => Some(SegmentType::App7),
            0xE8 => Some(SegmentType::App8),
            0xE9 => Some(SegmentType::App9),
            0xEA => Some(SegmentType::App10),
            0xEB => Some(SegmentType::App11),
            0xEC => Some(SegmentType::App12),
            0xED => Some(SegmentType::App13),
            0xEE => Some(SegmentType::App14),
            0xEF => Some(SegmentType::App15),
            0xF0..=0xFD => Some(SegmentType::JpgExt(code)),
            0xFE => Some(SegmentType::Com),
        }
    }

    /// The marker type byte for this segment type.
    pub fn code(&self) -> u8 {
        match self {
            SegmentType::Tem => 0x01,
            SegmentType::Res(code) => *code,
            SegmentType::Sof0 => 0xC0,
            SegmentType::Sof1 => 0xC1,
            SegmentType::Sof2 => 0xC2,
            SegmentType::Sof3 => 0xC3,
            SegmentType::Dht => 0xC4,
            SegmentType::Sof5 => 0xC5,
            SegmentType::Sof6 => 0xC6,
            SegmentType::Sof7 => 0xC7,
            SegmentType::Jpg => 0xC8,
            SegmentType::Sof9 => 0xC9,
            SegmentType::Sof10 => 0xCA,
            SegmentType::Sof11 => 0xCB,
            SegmentType::Dac => 0xCC,
            SegmentType::Sof13 => 0xCD,
            SegmentType::Sof14 => 0xCE,
            SegmentType::Sof15 => 0xCF,
            SegmentType::Rst0 => 0xD0,
            SegmentType::Rst1 => 0xD1,
            SegmentType::Rst2 => 0xD2,
            SegmentType::Rst3 => 0xD3,
            SegmentType::Rst4 => 0xD4,
            SegmentType::Rst5 => 0xD5,
            SegmentType::Rst6 => 0xD6,
            SegmentType::Rst7 => 0xD7,
            SegmentType::Soi => 0xD8,
            SegmentType::Eoi => 0xD9,
            SegmentType::Sos => 0xDA,
            SegmentType::Dqt => 0xDB,
            SegmentType::Dnl => 0xDC,
            SegmentType::Dri => 0xDD,
            SegmentType::Dhp => 0xDE,
            SegmentType::Exp => 0xDF,
            SegmentType::App0 => 0xE0,
            SegmentType::App1 => 0xE1,
            SegmentType::App2 => 0xE2,
            SegmentType::App3 => 0xE3,
            SegmentType::App4 => 0xE4,
            SegmentType::App5 => 0xE5,
            SegmentType::App6 => 0xE6,
            SegmentType::App7 => 0xE7,
            SegmentType::App8 => 0xE8,
            SegmentType::App9 => 0xE9,
            SegmentType::App10 => 0xEA,
            SegmentType::App11 => 0xEB,
            SegmentType::App12 => 0xEC,
            SegmentType::App13 => 0xED,
            SegmentType::App14 => 0xEE,
            SegmentType::App15 => 0xEF,
            SegmentType::JpgExt(code) => *code,
            SegmentType::Com => 0xFE,
        }
    }

    /// Whether this marker is followed by a 2-byte length field and payload.
    ///
    /// TEM, the restart markers, SOI and EOI stand alone; everything else,
    /// including the reserved band, carries a length field.
    pub fn has_payload(&self) -> bool {
        !matches!(
            self,
            SegmentType::Tem
                | SegmentType::Rst0
                | SegmentType::Rst1
                | SegmentType::Rst2
                | SegmentType::Rst3
                | SegmentType::Rst4
                | SegmentType::Rst5
                | SegmentType::Rst6
                | SegmentType::Rst7
                | SegmentType::Soi
                | SegmentType::Eoi
        )
    }

    /// Check if this is an application-specific segment (APP0..APP15).
    pub fn is_app(&self) -> bool {
        matches!(self.code(), 0xE0..=0xEF)
    }

    /// Check if this is a start-of-frame marker.
    pub fn is_frame(&self) -> bool {
        matches!(
            self,
            SegmentType::Sof0
                | SegmentType::Sof1
                | SegmentType::Sof2
                | SegmentType::Sof3
                | SegmentType::Sof5
                | SegmentType::Sof6
                | SegmentType::Sof7
                | SegmentType::Sof9
                | SegmentType::Sof10
                | SegmentType::Sof11
                | SegmentType::Sof13
                | SegmentType::Sof14
                | SegmentType::Sof15
        )
    }
}
