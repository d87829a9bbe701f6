use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an unsupported carrier media. Only PNG and BMP images are accepted
    #[error("Media format is not supported, expected a .png or .bmp file")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a payload that does not fit into the carrier image
    #[error("Capacity Error: the payload of {required} bytes does not fit, the carrier image can hold at most {available} bytes")]
    CapacityError { required: usize, available: usize },

    /// Represents a carrier that ended before the declared amount of data was read
    #[error("Truncated data: expected {expected} bytes but the carrier only provides {available}")]
    Truncated { expected: usize, available: usize },

    /// Represents the error of invalid UTF-8 text data found inside of a text payload
    #[error("Invalid text data found inside a payload")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents malformed structure, for example wrong magic bytes
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Represents a density unit code outside of 0, 1 or 2
    #[error("Invalid density unit specifier in APP0: {0}")]
    InvalidDensityUnits(u8),

    /// Represents an APP0 segment whose fields do not add up to the declared length
    #[error("APP0 segment length mismatch: declared {declared} bytes, fields took {consumed}")]
    DeclaredLengthMismatch { declared: u16, consumed: usize },

    /// Represents a thumbnail whose pixel count differs from its declared dimensions
    #[error("Thumbnail size mismatch: expected {expected} pixels, found {actual}")]
    ThumbnailSizeMismatch { expected: usize, actual: usize },

    /// Represents a byte stream that ended in the middle of a read
    #[error("Unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("API Error: Missing message, provide either a text message or a message file")]
    MissingMessage,

    #[error("API Error: A text message and a message file cannot be used together")]
    AmbiguousMessage,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
