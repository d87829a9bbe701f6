use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Result, Write};
use std::ops::DerefMut;

/// generic hiding algorithm, used for specific ones like the 2 bit LSB
pub trait HideAlgorithm {
    /// number of information bits stored in one carrier channel, must divide 8
    fn bits_per_channel(&self) -> u32;

    /// replaces the information bits of `carrier` with `information`
    fn encode(&self, carrier: &mut u8, information: u8);
}

/// hides 2 bits in the least significant bits of a color channel
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoBitHide;

impl TwoBitHide {
    pub const MASK: u8 = 0b0000_0011;
}

impl HideAlgorithm for TwoBitHide {
    fn bits_per_channel(&self) -> u32 {
        2
    }

    #[inline(always)]
    fn encode(&self, carrier: &mut u8, information: u8) {
        *carrier = (*carrier & !Self::MASK) | (information & Self::MASK);
    }
}

/// generic stegano encoder, writes whole bytes onto a stream of mutable carrier channels.
///
/// Every byte is split into bit groups, most significant group first, and each group
/// lands in the next channel yielded by `input`.
pub struct Encoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A>
where
    I: Iterator,
    I::Item: DerefMut<Target = u8>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Encoder { input, algorithm }
    }

    /// clears the information bits of every channel that was not written to
    pub fn clear_remaining(&mut self) -> usize {
        let mut cleared = 0;
        for mut channel in self.input.by_ref() {
            self.algorithm.encode(&mut *channel, 0);
            cleared += 1;
        }
        cleared
    }
}

impl<I, A> Write for Encoder<I, A>
where
    I: Iterator,
    I::Item: DerefMut<Target = u8>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let bits = self.algorithm.bits_per_channel();
        let groups_per_byte = 8 / bits;
        let mut bit_reader = BitReader::endian(buf, BigEndian);
        let mut bytes_written = 0;

        'bytes: for _ in buf {
            for _ in 0..groups_per_byte {
                let Some(mut channel) = self.input.next() else {
                    break 'bytes;
                };
                let group: u8 = bit_reader.read(bits)?;
                self.algorithm.encode(&mut *channel, group);
            }
            bytes_written += 1;
        }

        Ok(bytes_written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_only_the_two_lowest_bits() {
        let mut carrier = 0b1010_1010;
        TwoBitHide.encode(&mut carrier, 0b01);
        assert_eq!(carrier, 0b1010_1001);

        TwoBitHide.encode(&mut carrier, 0b1111_1110);
        assert_eq!(carrier, 0b1010_1010, "only the 2 lowest information bits count");
    }

    #[test]
    fn should_spread_one_byte_over_four_channels_most_significant_first() {
        let mut channels = [0xFF_u8; 4];
        {
            let mut encoder = Encoder::new(channels.iter_mut(), TwoBitHide);
            encoder
                .write_all(&[0b11_01_00_10])
                .expect("Cannot write one byte");
        }
        assert_eq!(channels, [0xFF, 0xFD, 0xFC, 0xFE]);
    }

    #[test]
    fn should_report_write_zero_when_channels_are_exhausted() {
        let mut channels = [0_u8; 4];
        let mut encoder = Encoder::new(channels.iter_mut(), TwoBitHide);

        assert_eq!(encoder.write(b"ab").unwrap(), 1);
        let err = encoder.write_all(b"c").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
    }

    #[test]
    fn should_clear_all_channels_left_behind() {
        let mut channels = [0xFF_u8; 8];
        {
            let mut encoder = Encoder::new(channels.iter_mut(), TwoBitHide);
            encoder.write_all(&[0xFF]).unwrap();
            assert_eq!(encoder.clear_remaining(), 4);
        }
        assert_eq!(channels, [0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0xFC, 0xFC, 0xFC]);
    }
}
