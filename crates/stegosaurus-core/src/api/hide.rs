use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::media::{image_format_of, Media, Persist};
use crate::{CodecOptions, Payload, Result, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    message_file: Option<PathBuf>,
    payload: Option<Payload>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Text message, hidden as text
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// File whose content is hidden as raw bytes
    pub fn with_message_file<A: AsRef<Path>>(mut self, message_file: A) -> Self {
        self.message_file = Some(message_file.as_ref().to_path_buf());
        self
    }

    pub fn use_message_file(mut self, message_file: Option<PathBuf>) -> Self {
        self.message_file = message_file;
        self
    }

    /// Any prepared payload, for example an integer
    pub fn with_payload<P: Into<Payload>>(mut self, payload: P) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Target image, when not set the carrier image gets overwritten
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn use_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn execute(self) -> Result<()> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let output = self.output.unwrap_or_else(|| image.clone());
        image_format_of(&output)?;

        let payload = match (self.message, self.message_file, self.payload) {
            (Some(message), _, _) => Payload::Text(message),
            (_, Some(message_file), _) => {
                debug!("reading message file {message_file:?}");
                Payload::Bytes(
                    fs::read(&message_file).map_err(|source| StegoError::ReadError { source })?,
                )
            }
            (_, _, Some(payload)) => payload,
            (None, None, None) => return Err(StegoError::MissingMessage),
        };

        Media::from_file(&image)?
            .hide_payload(&payload, &self.options)?
            .save_as(&output)
    }

    fn validate(&self) -> Result<()> {
        let sources = [
            self.message.is_some(),
            self.message_file.is_some(),
            self.payload.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();

        match sources {
            0 => Err(StegoError::MissingMessage),
            1 => Ok(()),
            _ => Err(StegoError::AmbiguousMessage),
        }
    }
}
