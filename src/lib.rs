//! Infers JSON Schema documents from example inputs.
//!
//! Given a single example payload, this crate derives a structural schema for
//! it: the type of every value, the properties of every object, and the item
//! shape of every array. The result is meant as a starting point for code
//! generation or validation, and can be written out as a JSON Schema
//! (draft-07) document.
//!
//! Every inference is made from one example, so a few things are guesses:
//!
//! * A number with no fractional part that fits in an `i64` becomes
//!   `integer`, anything else becomes `number`.
//! * Every property present in an object is `required`. Objects inside one
//!   array are merged: their properties are united, and only the keys present
//!   in all of them stay required.
//! * Strings are never given a `format`.
//!
//! # Quick start
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json_schema_infer::infer(json!({ "a": 1, "b": ["x", 2.5] }));
//!
//! assert_eq!(
//!     json!({
//!         "$schema": "http://json-schema.org/draft-07/schema#",
//!         "type": "object",
//!         "properties": {
//!             "a": { "type": "integer" },
//!             "b": {
//!                 "type": "array",
//!                 "items": { "anyOf": [{ "type": "string" }, { "type": "number" }] },
//!             },
//!         },
//!         "required": ["a", "b"],
//!     }),
//!     json_schema_infer::serialize::to_document(&schema).unwrap(),
//! );
//! ```
//!
//! To change how particular parts of the input are described, construct an
//! [`Inferrer`] with [`Hints`].

mod classify;
pub mod document;
mod error;
pub mod generate;
mod hints;
mod inferred_number;
mod schema;
pub mod serialize;

pub use crate::error::Error;
pub use crate::hints::{parse_json_pointer, HintSet, Hints};
pub use crate::schema::{AdditionalProperties, Literal, ObjectNode, Primitive, SchemaNode};
use serde_json::Value;

/// Infers schemas from example data, following a set of [`Hints`].
///
/// An `Inferrer` keeps no state between calls, so one instance can be shared
/// across threads to process independent documents.
#[derive(Debug, Default)]
pub struct Inferrer<'a> {
    hints: Hints<'a>,
}

impl<'a> Inferrer<'a> {
    /// Constructs a new inferrer with a given set of hints.
    ///
    /// See the documentation for [`Hints`] for details on what affect they have
    /// on [`Inferrer::infer`].
    pub fn new(hints: Hints<'a>) -> Self {
        Self { hints }
    }

    /// Infers a schema describing `value`.
    ///
    /// The resulting schema accepts `value`.
    pub fn infer(&self, value: Value) -> SchemaNode {
        classify::classify(value, &self.hints)
    }

    /// Parses `text` as JSON and infers a schema describing it.
    pub fn infer_str(&self, text: &str) -> Result<SchemaNode, Error> {
        Ok(self.infer(document::parse_str(text)?))
    }

    /// Parses `bytes` as JSON and infers a schema describing it.
    ///
    /// Bytes that are not valid UTF-8 are reported as [`Error::Parse`].
    pub fn infer_slice(&self, bytes: &[u8]) -> Result<SchemaNode, Error> {
        Ok(self.infer(document::parse_slice(bytes)?))
    }
}

/// Infers a schema for `value` with default hints.
pub fn infer(value: Value) -> SchemaNode {
    Inferrer::default().infer(value)
}

/// Parses `text` as JSON and infers a schema for it with default hints.
///
/// ```
/// use json_schema_infer::{infer_str, Error};
///
/// assert!(matches!(infer_str(r#"{"a": }"#), Err(Error::Parse { .. })));
/// ```
pub fn infer_str(text: &str) -> Result<SchemaNode, Error> {
    Inferrer::default().infer_str(text)
}

/// Renders `node` as a pretty-printed JSON Schema document.
pub fn serialize(node: &SchemaNode) -> Result<String, Error> {
    serialize::serialize(node)
}
