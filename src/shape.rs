//! Shape analysis: one JSON object → ordered property records.
//!
//! Key order is whatever `serde_json::Map` enumerates, which with the
//! `preserve_order` feature is document order.
use std::fmt;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Runtime kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind { Number, Boolean, String, Array, Null, Object }

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Number  => "number",
            Kind::Boolean => "boolean",
            Kind::String  => "string",
            Kind::Array   => "array",
            Kind::Null    => "null",
            Kind::Object  => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(v: &Value) -> Kind {
    match v {
        Value::Null      => Kind::Null,
        Value::Bool(_)   => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_)  => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// One own key of the analyzed object. Array element kinds are not resolved
/// here; renderers look at `value[0]` when they need it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord<'a> {
    pub name: &'a str,
    pub value: &'a Value,
    pub kind: Kind,
}

pub fn analyze(object: &Value) -> Result<Vec<PropertyRecord<'_>>> {
    let map = match object {
        Value::Object(map) => map,
        other => return Err(Error::malformed(classify(other))),
    };
    let records = map
        .iter()
        .map(|(name, value)| PropertyRecord {
            name: name.as_str(),
            value,
            kind: classify(value),
        })
        .collect::<Vec<_>>();
    debug!(properties = records.len(), "analyzed object");
    Ok(records)
}
