use clap::{Parser, Subcommand, ValueEnum};
use stegosaurus_core::{Algorithm, CodecOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Algorithm used to hide or show the message
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Lsb, global = true)]
    pub algorithm: AlgorithmArg,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default().with_algorithm(self.algorithm.into())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Show(show::ShowArgs),
    Inspect(inspect::InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// least significant bit steganography, 2 bits per RGBA channel
    Lsb,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Lsb => Algorithm::Lsb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_default_to_lsb() {
        let args = CliArgs::try_parse_from(["stegosaurus", "show", "-i", "secret.png"]).unwrap();
        assert_eq!(args.algorithm, AlgorithmArg::Lsb);
        assert_eq!(args.codec_options(), CodecOptions::default());
    }

    #[test]
    fn should_require_a_message_or_message_file_for_hide() {
        let result = CliArgs::try_parse_from(["stegosaurus", "hide", "-i", "carrier.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_not_accept_message_and_message_file_together() {
        let result = CliArgs::try_parse_from([
            "stegosaurus",
            "hide",
            "-i",
            "carrier.png",
            "-m",
            "Hi",
            "-f",
            "secret.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_hide_with_defaults() {
        let args = CliArgs::try_parse_from([
            "stegosaurus",
            "hide",
            "-i",
            "carrier.bmp",
            "-m",
            "Hi",
        ])
        .unwrap();

        match args.command {
            Commands::Hide(hide) => {
                assert_eq!(hide.message.as_deref(), Some("Hi"));
                assert!(hide.write_to_file.is_none());
                assert!(hide.message_file.is_none());
            }
            other => panic!("expected hide, got {other:?}"),
        }
    }
}
