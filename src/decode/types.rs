//! Error document types and traits

use super::decoders::{JsonErrorDecoder, XmlErrorDecoder};
use crate::error::{Error, Result};

/// Element or field names carrying the message, in priority order
pub(crate) const MESSAGE_FIELDS: [&str; 3] = ["errorDescription", "errorMessage", "message"];

/// Element or field names carrying the error code
pub(crate) const CODE_FIELDS: [&str; 2] = ["errorCode", "code"];

/// Serialization of an error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Json,
    Xml,
}

impl ErrorFormat {
    /// Guess the format from the first significant character
    pub fn detect(body: &str) -> Option<Self> {
        match body.trim_start().chars().next()? {
            '<' => Some(Self::Xml),
            '{' | '[' => Some(Self::Json),
            _ => None,
        }
    }
}

/// A decoded resource error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDocument {
    /// Remote error code, when present
    pub code: Option<String>,
    /// Human readable message
    pub description: String,
}

impl ErrorDocument {
    /// Decode a body in whichever format it appears to be
    pub fn parse(body: &str) -> Result<Self> {
        match ErrorFormat::detect(body) {
            Some(ErrorFormat::Json) => JsonErrorDecoder.decode(body),
            Some(ErrorFormat::Xml) => XmlErrorDecoder.decode(body),
            None => Err(Error::decode("body is neither JSON nor XML")),
        }
    }
}

/// Decoder for one error body format
pub trait ErrorDecoder {
    /// Extract the error document from a body
    fn decode(&self, body: &str) -> Result<ErrorDocument>;
}
