//! JFIF APP0 header parsing.
//!
//! The parser walks `ExpectSoi -> ExpectApp0Marker -> ReadApp0Fields -> Done`
//! and lands in `Failed` on the first error.

use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::marker::Marker;
use crate::binary_reader::{BinaryReader, Endianness};
use crate::error::StegoError;
use crate::result::Result;

pub const JFIF_IDENTIFIER: [u8; 5] = *b"JFIF\0";

/// bytes of the length field and the identifier, the first counted APP0 bytes
const LENGTH_AND_IDENTIFIER_LEN: usize = 7;

/// bytes per uncompressed thumbnail pixel
const RGB_LEN: usize = 3;

/// Units of the pixel density fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnits {
    /// no units, the densities describe the pixel aspect ratio
    #[default]
    None,
    PixelsPerInch,
    PixelsPerCm,
}

impl TryFrom<u8> for DensityUnits {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(DensityUnits::None),
            1 => Ok(DensityUnits::PixelsPerInch),
            2 => Ok(DensityUnits::PixelsPerCm),
            n => Err(StegoError::InvalidDensityUnits(n)),
        }
    }
}

/// Metadata of a JPEG file in JFIF format, as found in its APP0 segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegDocument {
    jfif_version: (u8, u8),
    density_units: DensityUnits,
    x_density: u16,
    y_density: u16,
    x_thumb: u8,
    y_thumb: u8,
    thumbnail_rgb: Vec<(u8, u8, u8)>,
}

impl JpegDocument {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref()).map_err(|source| StegoError::ReadError { source })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        JfifParser::new(reader).parse()
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }

    /// (major, minor)
    pub fn jfif_version(&self) -> (u8, u8) {
        self.jfif_version
    }

    pub fn density_units(&self) -> DensityUnits {
        self.density_units
    }

    pub fn x_density(&self) -> u16 {
        self.x_density
    }

    pub fn y_density(&self) -> u16 {
        self.y_density
    }

    pub fn x_thumb(&self) -> u8 {
        self.x_thumb
    }

    pub fn y_thumb(&self) -> u8 {
        self.y_thumb
    }

    /// uncompressed thumbnail, row-major, `x_thumb * y_thumb` pixels
    pub fn thumbnail_rgb(&self) -> &[(u8, u8, u8)] {
        &self.thumbnail_rgb
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState {
    ExpectSoi,
    ExpectApp0Marker,
    ReadApp0Fields,
    Done,
    Failed(String),
}

/// APP0 fields as read, before the length checks
struct App0Segment {
    declared_length: u16,
    consumed: usize,
    document: JpegDocument,
}

impl App0Segment {
    fn finish(self) -> Result<JpegDocument> {
        if self.consumed != self.declared_length as usize {
            return Err(StegoError::DeclaredLengthMismatch {
                declared: self.declared_length,
                consumed: self.consumed,
            });
        }

        let doc = self.document;
        let expected = doc.x_thumb as usize * doc.y_thumb as usize;
        if doc.thumbnail_rgb.len() != expected {
            return Err(StegoError::ThumbnailSizeMismatch {
                expected,
                actual: doc.thumbnail_rgb.len(),
            });
        }

        Ok(doc)
    }
}

/// Reads the SOI marker and the JFIF APP0 segment from the start of a JPEG stream
pub struct JfifParser<R> {
    reader: BinaryReader<R>,
    state: ParseState,
}

impl<R: Read> JfifParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BinaryReader::new(reader),
            state: ParseState::ExpectSoi,
        }
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Runs all remaining transitions
    pub fn parse(mut self) -> Result<JpegDocument> {
        loop {
            if let Some(document) = self.advance()? {
                return Ok(document);
            }
        }
    }

    /// Performs one state transition, the document is returned on reaching `Done`.
    ///
    /// Once failed, every further call repeats the failure.
    pub fn advance(&mut self) -> Result<Option<JpegDocument>> {
        let step = match self.state {
            ParseState::ExpectSoi => self
                .expect_marker(Marker::SOI, "Invalid bytes for SOI")
                .map(|_| (ParseState::ExpectApp0Marker, None)),
            ParseState::ExpectApp0Marker => self
                .expect_marker(Marker::APP(0), "APP0 marker invalid")
                .map(|_| (ParseState::ReadApp0Fields, None)),
            ParseState::ReadApp0Fields => self
                .read_app0_fields()
                .and_then(App0Segment::finish)
                .map(|document| (ParseState::Done, Some(document))),
            ParseState::Done => Ok((ParseState::Done, None)),
            ParseState::Failed(ref reason) => {
                return Err(StegoError::InvalidFormat(reason.clone()));
            }
        };

        match step {
            Ok((state, document)) => {
                debug!("JFIF parser {:?} -> {:?}", self.state, state);
                self.state = state;
                Ok(document)
            }
            Err(e) => {
                self.state = ParseState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn expect_marker(&mut self, expected: Marker, reason: &str) -> Result<()> {
        let code = self.reader.read_u16(Endianness::Big)?;
        match Marker::from_code(code) {
            Some(marker) if marker == expected => Ok(()),
            _ => Err(StegoError::InvalidFormat(format!(
                "{reason}, expected 0x{:04X} but found 0x{code:04X}",
                expected.code()
            ))),
        }
    }

    fn read_app0_fields(&mut self) -> Result<App0Segment> {
        // the declared length covers itself but not the marker
        let declared_length = self.reader.read_u16(Endianness::Big)?;
        let identifier = self.reader.read_bytes(JFIF_IDENTIFIER.len())?;
        if identifier != JFIF_IDENTIFIER {
            return Err(StegoError::InvalidFormat(
                "Invalid format identifier in APP0; expected null-terminated 'JFIF'".to_string(),
            ));
        }
        let mut consumed = LENGTH_AND_IDENTIFIER_LEN;

        let jfif_version = (self.reader.read_u8()?, self.reader.read_u8()?);
        consumed += 2;

        let density_units = DensityUnits::try_from(self.reader.read_u8()?)?;
        consumed += 1;

        let x_density = self.reader.read_u16(Endianness::Big)?;
        let y_density = self.reader.read_u16(Endianness::Big)?;
        consumed += 4;

        let x_thumb = self.reader.read_u8()?;
        let y_thumb = self.reader.read_u8()?;
        consumed += 2;

        // the thumbnail takes whatever the declared length leaves
        let thumbnail_pixels = (declared_length as usize).saturating_sub(consumed) / RGB_LEN;
        let mut thumbnail_rgb = Vec::with_capacity(thumbnail_pixels);
        for _ in 0..thumbnail_pixels {
            let rgb = self.reader.read_bytes(RGB_LEN)?;
            thumbnail_rgb.push((rgb[0], rgb[1], rgb[2]));
        }
        consumed += thumbnail_rgb.len() * RGB_LEN;

        Ok(App0Segment {
            declared_length,
            consumed,
            document: JpegDocument {
                jfif_version,
                density_units,
                x_density,
                y_density,
                x_thumb,
                y_thumb,
                thumbnail_rgb,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JFIF: [u8; 20] = [
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00,
    ];

    fn jfif_with_thumbnail(declared_length: u16, x: u8, y: u8, thumbnail: &[u8]) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&declared_length.to_be_bytes());
        data.extend_from_slice(&JFIF_IDENTIFIER);
        data.extend_from_slice(&[1, 2, 1, 0, 72, 0, 72, x, y]);
        data.extend_from_slice(thumbnail);
        data
    }

    #[test]
    fn should_parse_a_minimal_jfif_header() {
        let doc = JpegDocument::from_bytes(&MINIMAL_JFIF).expect("Cannot parse JFIF header");

        assert_eq!(doc.jfif_version(), (1, 1));
        assert_eq!(doc.density_units(), DensityUnits::None);
        assert_eq!((doc.x_density(), doc.y_density()), (1, 1));
        assert_eq!((doc.x_thumb(), doc.y_thumb()), (0, 0));
        assert!(doc.thumbnail_rgb().is_empty());
    }

    #[test]
    fn should_walk_through_all_states() {
        let mut parser = JfifParser::new(&MINIMAL_JFIF[..]);
        assert_eq!(parser.state(), &ParseState::ExpectSoi);

        assert!(parser.advance().unwrap().is_none());
        assert_eq!(parser.state(), &ParseState::ExpectApp0Marker);

        assert!(parser.advance().unwrap().is_none());
        assert_eq!(parser.state(), &ParseState::ReadApp0Fields);

        assert!(parser.advance().unwrap().is_some());
        assert_eq!(parser.state(), &ParseState::Done);
    }

    #[test]
    fn should_parse_a_thumbnail() {
        let thumbnail = [1, 2, 3, 4, 5, 6];
        let data = jfif_with_thumbnail(16 + 6, 2, 1, &thumbnail);

        let doc = JpegDocument::from_bytes(&data).unwrap();
        assert_eq!(doc.jfif_version(), (1, 2));
        assert_eq!(doc.density_units(), DensityUnits::PixelsPerInch);
        assert_eq!((doc.x_density(), doc.y_density()), (72, 72));
        assert_eq!(doc.thumbnail_rgb(), &[(1, 2, 3), (4, 5, 6)]);
    }

    #[test]
    fn should_fail_on_bad_soi_before_reading_app0() {
        // a PNG signature
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let mut parser = JfifParser::new(&data[..]);

        let result = parser.advance();
        assert!(matches!(result, Err(StegoError::InvalidFormat(_))));
        assert!(matches!(parser.state(), ParseState::Failed(_)));
        assert_eq!(parser.reader.position(), 2, "nothing beyond SOI was read");

        assert!(matches!(
            parser.advance(),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_fail_on_missing_app0_marker() {
        let mut data = MINIMAL_JFIF;
        data[3] = 0xE1;

        assert!(matches!(
            JpegDocument::from_bytes(&data),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_fail_on_wrong_identifier() {
        let mut data = MINIMAL_JFIF;
        data[6..11].copy_from_slice(b"Exif\0");

        assert!(matches!(
            JpegDocument::from_bytes(&data),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_fail_on_invalid_density_units() {
        let mut data = MINIMAL_JFIF;
        data[13] = 3;

        assert!(matches!(
            JpegDocument::from_bytes(&data),
            Err(StegoError::InvalidDensityUnits(3))
        ));
    }

    #[test]
    fn should_report_a_thumbnail_size_mismatch() {
        // length fits exactly one pixel, the header claims 2x2
        let data = jfif_with_thumbnail(16 + 3, 2, 2, &[9, 9, 9]);

        match JpegDocument::from_bytes(&data) {
            Err(StegoError::ThumbnailSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 1);
            }
            other => panic!("expected a thumbnail size mismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_report_a_declared_length_mismatch() {
        // one dangling byte that is no full RGB pixel
        let data = jfif_with_thumbnail(16 + 4, 1, 1, &[9, 9, 9, 9]);

        match JpegDocument::from_bytes(&data) {
            Err(StegoError::DeclaredLengthMismatch { declared, consumed }) => {
                assert_eq!(declared, 20);
                assert_eq!(consumed, 19);
            }
            other => panic!("expected a declared length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_report_fields_exceeding_a_too_small_declared_length() {
        let data = jfif_with_thumbnail(8, 0, 0, &[]);

        assert!(matches!(
            JpegDocument::from_bytes(&data),
            Err(StegoError::DeclaredLengthMismatch {
                declared: 8,
                consumed: 16
            })
        ));
    }

    #[test]
    fn should_fail_on_a_truncated_thumbnail() {
        let data = jfif_with_thumbnail(16 + 6, 2, 1, &[1, 2, 3, 4]);

        assert!(matches!(
            JpegDocument::from_bytes(&data),
            Err(StegoError::UnexpectedEndOfStream)
        ));
    }
}
