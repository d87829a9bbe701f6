use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::{ImageFormat, RgbaImage};
use log::{debug, error};

use crate::error::StegoError;
use crate::media::image::LsbCodec;
use crate::media::{Algorithm, CodecOptions, Persist};
use crate::payload::Payload;
use crate::result::Result;

/// a media container for steganography, always held as RGBA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Loads a `.png` or `.bmp` image and converts it to RGBA
    pub fn from_file(f: &Path) -> Result<Self> {
        let format = image_format_of(f)?;
        debug!("loading {format:?} carrier from {f:?}");
        let image = image::open(f)
            .map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                StegoError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn hide_payload(&mut self, payload: &Payload, opts: &CodecOptions) -> Result<&mut Self> {
        match opts.algorithm {
            Algorithm::Lsb => {
                LsbCodec::hide(&mut self.image, &payload.to_raw_data(), payload.is_string())?
            }
        }

        Ok(self)
    }

    pub fn unveil_payload(&self, opts: &CodecOptions) -> Result<Payload> {
        let (data, is_string) = match opts.algorithm {
            Algorithm::Lsb => LsbCodec::unveil(&self.image)?,
        };

        Payload::from_raw_data(data, is_string)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.image.write_to(&mut writer, format).map_err(|e| {
            error!("Error saving image: {e}");
            StegoError::ImageEncodingError
        })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let format = image_format_of(file)?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

/// Only lossless formats keep the hidden bits intact, that is PNG and BMP
pub fn image_format_of(f: &Path) -> Result<ImageFormat> {
    let ext = f
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or(StegoError::UnsupportedMedia)?;

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        _ => Err(StegoError::UnsupportedMedia),
    }
}
