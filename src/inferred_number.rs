use crate::schema::{Literal, Primitive};
use serde_json::Number;

// i64::MIN and i64::MAX + 1, both exactly representable as f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// What a single example number says about its type.
///
/// A number is considered an integer if it has no fractional component and
/// fits in an `i64`. This is read off one example value, so `1.0` is an
/// integer here even if the field would carry `1.5` in other payloads.
#[derive(Debug, PartialEq)]
pub enum InferredNumber {
    Integer(i64),
    Float(f64),
}

impl InferredNumber {
    pub fn new(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            return InferredNumber::Integer(i);
        }

        // A u64 that does not fit an i64 falls through to here, as does any
        // float. as_f64 never fails without arbitrary_precision.
        let f = n.as_f64().unwrap_or(f64::NAN);
        if f.fract() == 0.0 && f >= I64_LOWER && f < I64_UPPER && !n.is_u64() {
            InferredNumber::Integer(f as i64)
        } else {
            InferredNumber::Float(f)
        }
    }

    pub fn primitive(&self) -> Primitive {
        match self {
            InferredNumber::Integer(_) => Primitive::Integer,
            InferredNumber::Float(_) => Primitive::Number,
        }
    }

    pub fn into_literal(self) -> Literal {
        match self {
            InferredNumber::Integer(i) => Literal::Integer(i),
            InferredNumber::Float(f) => Literal::Number(f),
        }
    }
}
