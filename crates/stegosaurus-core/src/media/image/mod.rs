mod iterators;
pub mod lsb_codec;

pub use lsb_codec::LsbCodec;
