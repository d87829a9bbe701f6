use std::path::PathBuf;

use clap::{ArgGroup, Args};
use stegosaurus_core::CodecOptions;

use crate::CliResult;

/// Hides a text message or a file in PNG and BMP images
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["message", "message_file"])))]
pub struct HideArgs {
    /// Image file, either .png or .bmp
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, defaults to overwriting the input image
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// A file that will be hidden as binary data
    #[arg(short = 'f', long = "message-file", value_name = "message file")]
    pub message_file: Option<PathBuf>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegosaurus_core::commands::hide(
            &self.media,
            self.write_to_file,
            self.message,
            self.message_file,
            options,
        )
    }
}
