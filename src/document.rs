//! Parsing example documents into [`serde_json::Value`].
//!
//! Object keys keep the order in which they appear in the input, which in
//! turn fixes the order of `properties` and `required` in inferred schemas.

use crate::Error;
use serde_json::Value;
use std::io::Read;

/// Parses a JSON document from text.
pub fn parse_str(text: &str) -> Result<Value, Error> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a JSON document from bytes.
pub fn parse_slice(bytes: &[u8]) -> Result<Value, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parses a JSON document from a reader.
///
/// The reader should be buffered; `serde_json` reads it byte by byte.
pub fn parse_reader<R: Read>(reader: R) -> Result<Value, Error> {
    Ok(serde_json::from_reader(reader)?)
}
