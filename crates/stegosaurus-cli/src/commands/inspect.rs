use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Prints the JFIF header (APP0 segment) of a JPEG file
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JPEG file in JFIF format
    #[arg(short = 'i', long = "in", value_name = "jpeg file", required = true)]
    pub jpeg: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let doc = stegosaurus_core::commands::inspect_jpeg(&self.jpeg)?;
        let (major, minor) = doc.jfif_version();

        println!("JFIF version:   {major}.{minor:02}");
        println!("Density units:  {:?}", doc.density_units());
        println!("Density:        {} x {}", doc.x_density(), doc.y_density());
        println!(
            "Thumbnail:      {} x {} ({} pixels)",
            doc.x_thumb(),
            doc.y_thumb(),
            doc.thumbnail_rgb().len()
        );

        Ok(())
    }
}
