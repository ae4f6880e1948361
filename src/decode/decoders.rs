//! Error document decoders

use super::types::{ErrorDecoder, ErrorDocument, CODE_FIELDS, MESSAGE_FIELDS};
use crate::error::{Error, Result};
use crate::xml::Document;
use serde_json::{Map, Value};

// ============================================================================
// JSON Decoder
// ============================================================================

/// Decodes `{"errorCode": ..., "errorDescription": "..."}` style bodies
///
/// The message may sit at the top level, in the first entry of an
/// `errors` array or inside an `error` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonErrorDecoder;

impl ErrorDecoder for JsonErrorDecoder {
    fn decode(&self, body: &str) -> Result<ErrorDocument> {
        let value: Value = serde_json::from_str(body)?;

        candidates(&value)
            .into_iter()
            .find_map(from_object)
            .ok_or_else(|| Error::decode("no message field in JSON error body"))
    }
}

fn candidates(value: &Value) -> Vec<&Map<String, Value>> {
    let mut found = Vec::new();
    let first = match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    if let Some(Value::Object(map)) = first {
        found.push(map);
        if let Some(Value::Object(inner)) = map.get("error") {
            found.push(inner);
        }
        if let Some(Value::Array(errors)) = map.get("errors") {
            if let Some(Value::Object(inner)) = errors.first() {
                found.push(inner);
            }
        }
    }
    found
}

fn from_object(map: &Map<String, Value>) -> Option<ErrorDocument> {
    let description = MESSAGE_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(scalar_to_string))?;
    let code = CODE_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(scalar_to_string));

    Some(ErrorDocument { code, description })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// XML Decoder
// ============================================================================

/// Decodes `<errors><errorDescription>...</errorDescription></errors>` style
/// bodies, looking for the message element anywhere in the tree
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlErrorDecoder;

impl ErrorDecoder for XmlErrorDecoder {
    fn decode(&self, body: &str) -> Result<ErrorDocument> {
        let doc = Document::parse(body)?;
        let root = doc.root();

        let description = MESSAGE_FIELDS
            .iter()
            .filter_map(|name| root.descendant(name))
            .map(|e| e.text().trim().to_string())
            .find(|text| !text.is_empty())
            .ok_or_else(|| Error::decode("no message element in XML error body"))?;

        let code = CODE_FIELDS
            .iter()
            .filter_map(|name| root.descendant(name))
            .map(|e| e.text().trim().to_string())
            .find(|text| !text.is_empty());

        Ok(ErrorDocument { code, description })
    }
}
