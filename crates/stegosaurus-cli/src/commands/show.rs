use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use log::info;
use stegosaurus_core::{CodecOptions, Payload, StegoError};

use crate::CliResult;

/// Shows the message hidden in a PNG or BMP image
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file instead of being printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl ShowArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let to_file = self.output_file.is_some();
        let payload = stegosaurus_core::commands::show(&self.media, self.output_file, options)?;

        if to_file {
            info!("message written to file");
            return Ok(());
        }

        match payload {
            Payload::Text(text) => println!("{text}"),
            other => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(&other.into_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| StegoError::WriteError { source })?;
            }
        }

        Ok(())
    }
}
