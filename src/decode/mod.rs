//! Error response decoding
//!
//! Supports: JSON, XML
//!
//! # Overview
//!
//! When a remote call fails, SFG answers with an error document describing
//! what went wrong. This module turns such a body into the human readable
//! text reported to callers, falling back to the raw body when it cannot be
//! decoded, and to the status line when there is no body at all.

mod decoders;
mod types;

pub use decoders::{JsonErrorDecoder, XmlErrorDecoder};
pub use types::{ErrorDecoder, ErrorDocument, ErrorFormat};

use tracing::warn;

/// Produce the normalized description of a failed call
///
/// With `body_is_present` the text is decoded as an error document and its
/// message returned; an undecodable body is returned unchanged. Without a
/// body the caller passes the status line, which is returned as is. This
/// function never fails.
pub fn describe_error(text: &str, body_is_present: bool) -> String {
    if !body_is_present {
        return text.to_string();
    }

    match ErrorDocument::parse(text) {
        Ok(doc) => doc.description,
        Err(e) => {
            warn!("Could not decode error response, using raw body: {e}");
            text.to_string()
        }
    }
}
