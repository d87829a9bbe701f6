use std::fs;
use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::{CodecOptions, Payload, Result, StegoError};

pub fn prepare() -> ShowApi {
    ShowApi::default()
}

#[derive(Default, Debug)]
pub struct ShowApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl ShowApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the payload to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The payload bytes are written to this file, text as UTF-8
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn execute(self) -> Result<Payload> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let payload = Media::from_file(&secret_media)?.unveil_payload(&self.options)?;

        if let Some(output_file) = self.output_file {
            fs::write(output_file, payload.to_raw_data())
                .map_err(|source| StegoError::WriteError { source })?;
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_png_carrier;
    use tempfile::tempdir;

    #[test]
    fn should_write_unveiled_text_as_utf8() {
        let temp_dir = tempdir().unwrap();
        let carrier = prepare_png_carrier(temp_dir.path(), 16, 16);
        let output = temp_dir.path().join("secret.txt");

        crate::api::hide::prepare()
            .with_message("Grüße")
            .with_image(&carrier)
            .execute()
            .unwrap();

        let payload = prepare()
            .from_secret_file(&carrier)
            .into_output_file(&output)
            .execute()
            .unwrap();

        assert_eq!(payload, Payload::Text("Grüße".to_string()));
        assert_eq!(fs::read_to_string(output).unwrap(), "Grüße");
    }

    #[test]
    fn should_require_a_secret_media() {
        assert!(matches!(
            prepare().execute(),
            Err(StegoError::CarrierNotSet)
        ));
    }
}
