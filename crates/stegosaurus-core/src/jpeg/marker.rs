//! JPEG marker definitions, limited to what the JFIF header needs.

/// JPEG marker types (ITU T.81 Table B.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Marker {
    /// Start of Image.
    SOI,
    /// End of Image.
    EOI,
    /// Application segment (0-15), JFIF lives in APP0.
    APP(u8),
    /// Any other marker, not interpreted.
    Other(u8),
}

impl Marker {
    /// Convert a two byte marker code like `0xFFD8` to a Marker.
    ///
    /// Returns None when the first byte is not `0xFF`, or for the
    /// stuffed byte (0x00) and fill byte (0xFF).
    pub fn from_code(code: u16) -> Option<Marker> {
        let [prefix, n] = code.to_be_bytes();
        if prefix != 0xFF {
            return None;
        }

        use Marker::*;
        match n {
            0x00 | 0xFF => None,
            0xD8 => Some(SOI),
            0xD9 => Some(EOI),
            0xE0..=0xEF => Some(APP(n - 0xE0)),
            _ => Some(Other(n)),
        }
    }

    pub fn code(self) -> u16 {
        let n = match self {
            Marker::SOI => 0xD8,
            Marker::EOI => 0xD9,
            Marker::APP(n) => 0xE0 + n,
            Marker::Other(n) => n,
        };
        u16::from_be_bytes([0xFF, n])
    }
}
