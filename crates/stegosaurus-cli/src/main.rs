use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegosaurus_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Show(show) => show.run(options),
        Commands::Inspect(inspect) => inspect.run(),
    }
}
