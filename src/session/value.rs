//! Wire values and their decoded, application-facing counterparts.
//!
//! `RawValue` mirrors the engine's tagged union: exactly one variant is
//! active per value. `FieldValue` is what callers see after decoding. The
//! only variant that changes shape on the way through is `Str`, which the
//! engine sends as raw bytes and callers receive as text.

use std::fmt;

use serde::Serialize;

/// Kind of a complex engine value that is passed through without
/// field-level interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Vertex,
    Edge,
    Path,
    List,
    Map,
    Set,
    Bytes,
    Other,
}

/// An opaque structured value (vertex, edge, path, collection...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphValue {
    pub kind: GraphKind,
    pub value: serde_json::Value,
}

impl GraphValue {
    pub fn new(kind: GraphKind, value: serde_json::Value) -> Self {
        Self { kind, value }
    }
}

/// A single value as sent by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// UTF-8 text encoded as bytes. The payload itself may be absent.
    Str(Option<Vec<u8>>),
    Graph(GraphValue),
}

impl RawValue {
    /// Convenience constructor for a present string payload.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(Some(s.into().into_bytes()))
    }

    /// Name of the active tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Graph(_) => "graph",
        }
    }

    /// Decode into the value handed to callers.
    ///
    /// String bytes are decoded as UTF-8, replacing invalid sequences. A
    /// missing string payload becomes `FieldValue::Null`, never `""`.
    pub fn decode(&self) -> FieldValue {
        match self {
            Self::Str(Some(bytes)) => FieldValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            Self::Str(None) => FieldValue::Null,
            Self::Null => FieldValue::Null,
            Self::Bool(b) => FieldValue::Bool(*b),
            Self::Int(i) => FieldValue::Int(*i),
            Self::Float(f) => FieldValue::Float(*f),
            Self::Graph(g) => FieldValue::Graph(g.clone()),
        }
    }
}

/// A decoded value inside a normalized row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Graph(GraphValue),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view; floats are truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&GraphValue> {
        match self {
            Self::Graph(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::Graph(_) => "graph",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
            Self::Graph(g) => write!(f, "{}", g.value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
