pub mod codec_options;
pub mod image;
mod types;

use std::path::Path;

pub use codec_options::{Algorithm, CodecOptions};
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
