use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Cursor, Read, Result};

/// generic unveil algorithm, counterpart of [`crate::universal_encoder::HideAlgorithm`]
pub trait UnveilAlgorithm {
    /// number of information bits stored in one carrier channel, must divide 8
    fn bits_per_channel(&self) -> u32;

    /// extracts the information bits of `carrier`
    fn decode(&self, carrier: u8) -> u8;
}

/// reads the 2 least significant bits of a color channel
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoBitUnveil;

impl UnveilAlgorithm for TwoBitUnveil {
    fn bits_per_channel(&self) -> u32 {
        2
    }

    #[inline(always)]
    fn decode(&self, carrier: u8) -> u8 {
        carrier & 0b0000_0011
    }
}

/// generic stegano decoder, reassembles bytes from a stream of carrier channels
pub struct Decoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bits = self.algorithm.bits_per_channel();
        let groups_per_byte = (8 / bits) as usize;
        let groups_to_take = buf.len() * groups_per_byte;
        let mut bit_buffer = BitWriter::endian(Cursor::new(&mut *buf), BigEndian);

        let mut groups_read = 0;
        for carrier in self.input.by_ref().take(groups_to_take) {
            bit_buffer.write(bits, self.algorithm.decode(carrier))?;
            groups_read += 1;
        }

        if !bit_buffer.byte_aligned() {
            bit_buffer.byte_align()?;
        }

        Ok(groups_read / groups_per_byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reassemble_a_byte_from_four_channels() {
        let channels = [0xFF_u8, 0xFD, 0xFC, 0xFE];
        let mut buf = [0_u8; 1];

        Decoder::new(channels.into_iter(), TwoBitUnveil)
            .read_exact(&mut buf)
            .expect("Cannot read one byte");

        assert_eq!(buf[0], 0b11_01_00_10);
    }

    #[test]
    fn should_fail_on_read_exact_beyond_the_carrier() {
        let channels = [0_u8; 6];
        let mut buf = [0_u8; 2];

        let err = Decoder::new(channels.into_iter(), TwoBitUnveil)
            .read_exact(&mut buf)
            .unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
