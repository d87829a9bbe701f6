pub mod jfif;
pub mod marker;

pub use jfif::{DensityUnits, JfifParser, JpegDocument, ParseState};
pub use marker::Marker;
