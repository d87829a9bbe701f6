use crate::result::Result;

/// Data that is hidden inside of a carrier, tagged with its original kind.
///
/// Only the text tag survives the trip through an image. An [`Payload::Integer`]
/// comes back as [`Payload::Bytes`] holding its 8 big-endian bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Integer(i64),
    Bytes(Vec<u8>),
}

impl Payload {
    /// true if the payload has to be unveiled as UTF-8 text
    pub fn is_string(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    /// Serializes the payload into the bytes that are hidden
    pub fn to_raw_data(&self) -> Vec<u8> {
        match self {
            Payload::Text(text) => text.as_bytes().to_vec(),
            Payload::Integer(i) => i.to_be_bytes().to_vec(),
            Payload::Bytes(data) => data.clone(),
        }
    }

    /// Rebuilds a payload from unveiled bytes, text is validated as UTF-8
    pub fn from_raw_data(data: Vec<u8>, is_string: bool) -> Result<Self> {
        if is_string {
            Ok(Payload::Text(String::from_utf8(data)?))
        } else {
            Ok(Payload::Bytes(data))
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Text(text) => text.into_bytes(),
            Payload::Integer(i) => i.to_be_bytes().to_vec(),
            Payload::Bytes(data) => data,
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<i64> for Payload {
    fn from(i: i64) -> Self {
        Payload::Integer(i)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::Bytes(data)
    }
}
