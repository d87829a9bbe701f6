use std::path::{Path, PathBuf};

use crate::jpeg::JpegDocument;
use crate::{CodecOptions, Payload, Result};

/// Hides either a text message or the content of a message file in `media`.
/// Without `write_to_file` the carrier is overwritten.
pub fn hide(
    media: &Path,
    write_to_file: Option<PathBuf>,
    message: Option<String>,
    message_file: Option<PathBuf>,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .use_output(write_to_file)
        .use_message(message)
        .use_message_file(message_file)
        .execute()
}

/// Unveils the payload of `secret_media`, optionally dumping it into `output_file`
pub fn show(
    secret_media: &Path,
    output_file: Option<PathBuf>,
    options: CodecOptions,
) -> Result<Payload> {
    crate::api::show::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .use_output_file(output_file)
        .execute()
}

/// Reads the JFIF APP0 metadata of a JPEG file
pub fn inspect_jpeg(jpeg_file: &Path) -> Result<JpegDocument> {
    JpegDocument::from_file(jpeg_file)
}
