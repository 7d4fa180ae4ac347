//! Rendering [`SchemaNode`] trees as JSON Schema.
//!
//! Keys come out in a fixed order: `type`, `enum`, `properties`, `required`,
//! `additionalProperties`, `items`, `anyOf`. Property names keep the order in
//! which they were observed.

use crate::schema::{AdditionalProperties, Literal, SchemaNode};
use crate::Error;
use serde_json::{Map, Number, Value};
use std::io::Write;

/// The draft every generated document declares in `$schema`.
pub const SCHEMA_URI: &str = "http://json-schema.org/draft-07/schema#";

/// Renders a node as a schema fragment, without `$schema`.
pub fn to_value(node: &SchemaNode) -> Result<Value, Error> {
    let mut out = Map::new();

    if let Some(type_name) = node.type_name() {
        out.insert("type".to_owned(), Value::String(type_name.to_owned()));
    }

    match node {
        SchemaNode::Any | SchemaNode::Type(_) => {}
        SchemaNode::Enum(values) => {
            let values = values
                .iter()
                .map(literal_to_value)
                .collect::<Result<Vec<_>, Error>>()?;
            out.insert("enum".to_owned(), Value::Array(values));
        }
        SchemaNode::Object(object) => {
            let mut properties = Map::new();
            for (k, v) in &object.properties {
                properties.insert(k.clone(), to_value(v)?);
            }

            out.insert("properties".to_owned(), Value::Object(properties));
            out.insert(
                "required".to_owned(),
                object.required.iter().cloned().map(Value::String).collect(),
            );

            if object.additional_properties == AdditionalProperties::Denied {
                out.insert("additionalProperties".to_owned(), Value::Bool(false));
            }
        }
        SchemaNode::Map(values) => {
            out.insert("additionalProperties".to_owned(), to_value(values)?);
        }
        SchemaNode::Array(items) => {
            out.insert("items".to_owned(), to_value(items)?);
        }
        SchemaNode::AnyOf(members) => {
            let members = members.iter().map(to_value).collect::<Result<Vec<_>, Error>>()?;
            out.insert("anyOf".to_owned(), Value::Array(members));
        }
    }

    Ok(Value::Object(out))
}

/// Renders a node as a root schema document, led by `$schema`.
pub fn to_document(node: &SchemaNode) -> Result<Value, Error> {
    let mut out = Map::new();
    out.insert("$schema".to_owned(), Value::String(SCHEMA_URI.to_owned()));

    if let Value::Object(fragment) = to_value(node)? {
        out.extend(fragment);
    }

    Ok(Value::Object(out))
}

/// Pretty-prints a node as a root schema document, two spaces per level.
pub fn serialize(node: &SchemaNode) -> Result<String, Error> {
    let document = to_document(node)?;
    serde_json::to_string_pretty(&document).map_err(|e| Error::Serialization(e.to_string()))
}

/// Like [`serialize`], but writes into `writer`.
pub fn serialize_to_writer<W: Write>(node: &SchemaNode, writer: W) -> Result<(), Error> {
    let document = to_document(node)?;
    serde_json::to_writer_pretty(writer, &document).map_err(|e| Error::Serialization(e.to_string()))
}

fn literal_to_value(literal: &Literal) -> Result<Value, Error> {
    Ok(match literal {
        Literal::Null => Value::Null,
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Integer(i) => Value::Number((*i).into()),
        Literal::Number(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| Error::Serialization(format!("{} is not a JSON number", f)))?,
        Literal::String(s) => Value::String(s.clone()),
    })
}
