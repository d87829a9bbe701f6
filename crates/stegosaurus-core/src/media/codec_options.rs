/// Codec configuration for steganography encoding/decoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pub algorithm: Algorithm,
}

impl CodecOptions {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Hiding algorithm to use on the carrier
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// 2 bits per RGBA channel, see [`crate::media::image::LsbCodec`]
    #[default]
    Lsb,
}
