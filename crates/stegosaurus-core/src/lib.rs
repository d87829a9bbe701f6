//! # Stegosaurus Core API
//!
//! Hides a payload (text, an integer or raw bytes) in the 2 least significant
//! bits of every RGBA channel of a PNG or BMP image, and reads the JFIF APP0
//! header of JPEG files.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{ImageBuffer, Rgba, RgbaImage};
//! use stegosaurus_core::media::image::LsbCodec;
//!
//! let mut carrier: RgbaImage = ImageBuffer::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
//!
//! LsbCodec::hide(&mut carrier, "Hello, World!".as_bytes(), true)
//!     .expect("Failed to hide message in image");
//!
//! let (data, is_string) = LsbCodec::unveil(&carrier).expect("Failed to unveil message");
//! assert_eq!(data, b"Hello, World!");
//! assert!(is_string);
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust,no_run
//! stegosaurus_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.png")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Read the JFIF header of a JPEG
//!
//! ```rust
//! use stegosaurus_core::jpeg::{DensityUnits, JpegDocument};
//!
//! let header = [
//!     0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00,
//!     0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
//! ];
//! let doc = JpegDocument::from_bytes(&header).expect("Not a JFIF file");
//! assert_eq!(doc.jfif_version(), (1, 1));
//! assert_eq!(doc.density_units(), DensityUnits::None);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod binary_reader;
pub mod commands;
pub mod error;
pub mod jpeg;
pub mod media;
pub mod payload;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::StegoError;
pub use crate::media::{Algorithm, CodecOptions, Media, Persist};
pub use crate::payload::Payload;
pub use crate::result::Result;
