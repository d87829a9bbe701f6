use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use image::{Rgba, RgbaImage};
use log::debug;
use std::io::{ErrorKind, Read, Write};
use std::iter::Copied;

use super::iterators::{ColorIter, ColorIterMut};
use crate::error::StegoError;
use crate::result::Result;
use crate::universal_decoder::{Decoder, TwoBitUnveil};
use crate::universal_encoder::{Encoder, TwoBitHide};

/// Pixels at the start of row 0 that carry the length (4) and the type tag (1).
pub const HEADER_PIXELS: usize = 5;

/// Carrier pixels consumed by one payload byte, 2 bits in each of R, G, B and A.
pub const PIXELS_PER_BYTE: usize = 4;

/// Type tag byte as written through the encoder, puts `01` into the red channel
/// of the type pixel and `00` into green, blue and alpha.
const STRING_TAG: u8 = 0b0100_0000;

pub type ImageEncoder<'i> = Encoder<ColorIterMut<'i, Rgba<u8>>, TwoBitHide>;
pub type ImageDecoder<'i> = Decoder<Copied<ColorIter<'i, Rgba<u8>>>, TwoBitUnveil>;

/// 2 bit LSB codec for RGBA images.
///
/// Layout, row-major starting at (0,0):
/// - pixels 0..4: payload length as big-endian u32, 1 byte per pixel
/// - pixel 4: type tag in the red channel, `01` for text and `00` otherwise
/// - pixels 5..: payload, 2 bits per channel in R, G, B, A order
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &RgbaImage) -> ImageDecoder<'_> {
        Decoder::new(ColorIter::from_pixels(input.pixels()).copied(), TwoBitUnveil)
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RgbaImage) -> ImageEncoder<'_> {
        Encoder::new(ColorIterMut::from_pixels(carrier.pixels_mut()), TwoBitHide)
    }

    /// Number of payload bytes `carrier` is able to hold
    pub fn capacity(carrier: &RgbaImage) -> usize {
        pixel_count(carrier).saturating_sub(HEADER_PIXELS) / PIXELS_PER_BYTE
    }

    /// Hides `data` in `carrier`, tagged as text or not.
    ///
    /// Nothing is touched when the data does not fit. Otherwise every channel
    /// of the image gets its 2 lowest bits rewritten, those behind the payload
    /// are zeroed.
    pub fn hide(carrier: &mut RgbaImage, data: &[u8], is_string: bool) -> Result<()> {
        let required_pixels = data
            .len()
            .checked_mul(PIXELS_PER_BYTE)
            .and_then(|p| p.checked_add(HEADER_PIXELS));
        let length = u32::try_from(data.len());
        let available = Self::capacity(carrier);

        let length = match (required_pixels, length) {
            (Some(p), Ok(length)) if p <= pixel_count(carrier) => length,
            _ => {
                return Err(StegoError::CapacityError {
                    required: data.len(),
                    available,
                })
            }
        };
        debug!("hiding {length} bytes (is_string={is_string}), capacity is {available} bytes");

        let mut encoder = Self::encoder(carrier);
        encoder.write_u32::<BigEndian>(length)?;
        encoder.write_u8(if is_string { STRING_TAG } else { 0 })?;
        encoder.write_all(data)?;
        let cleared = encoder.clear_remaining();
        debug!("cleared {cleared} trailing channels");

        Ok(())
    }

    /// Unveils the raw payload bytes and the text tag from `carrier`
    pub fn unveil(carrier: &RgbaImage) -> Result<(Vec<u8>, bool)> {
        let pixels = pixel_count(carrier);
        if pixels < HEADER_PIXELS {
            return Err(StegoError::Truncated {
                expected: HEADER_PIXELS,
                available: pixels,
            });
        }

        let mut decoder = Self::decoder(carrier);
        let length = decoder.read_u32::<BigEndian>()? as usize;
        let is_string = (decoder.read_u8()? >> 6) & 0b11 != 0;
        debug!("unveiling {length} bytes (is_string={is_string})");

        let available = Self::capacity(carrier);
        if length > available {
            return Err(StegoError::Truncated {
                expected: length,
                available,
            });
        }

        let mut data = vec![0; length];
        decoder.read_exact(&mut data).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => StegoError::Truncated {
                expected: length,
                available,
            },
            _ => StegoError::IoError(e),
        })?;

        Ok((data, is_string))
    }
}

fn pixel_count(carrier: &RgbaImage) -> usize {
    carrier.width() as usize * carrier.height() as usize
}
