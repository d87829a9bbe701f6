//! Sequential reads of fixed width unsigned integers and byte runs.
//!
//! Every multi-byte read is composed of single byte reads in stream order,
//! the cursor only ever moves forward.

use byteorder::{ByteOrder, ReadBytesExt, BE, LE};
use std::io::{ErrorKind, Read};

use crate::error::StegoError;
use crate::result::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

pub struct BinaryReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let b = self.inner.read_u8().map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => StegoError::UnexpectedEndOfStream,
            _ => StegoError::ReadError { source: e },
        })?;
        self.position += 1;

        Ok(b)
    }

    pub fn read_u16(&mut self, endianness: Endianness) -> Result<u16> {
        let buf = [self.read_u8()?, self.read_u8()?];

        Ok(match endianness {
            Endianness::Big => BE::read_u16(&buf),
            Endianness::Little => LE::read_u16(&buf),
        })
    }

    pub fn read_u32(&mut self, endianness: Endianness) -> Result<u32> {
        let mut buf = [0; 4];
        for b in buf.iter_mut() {
            *b = self.read_u8()?;
        }

        Ok(match endianness {
            Endianness::Big => BE::read_u32(&buf),
            Endianness::Little => LE::read_u32(&buf),
        })
    }

    /// reads exactly `n` bytes, one at a time
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        (0..n).map(|_| self.read_u8()).collect()
    }
}
