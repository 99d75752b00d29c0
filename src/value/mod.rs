//! Dynamic value representation shared by component properties and state.
//!
//! Every property of a component, every action argument and every state
//! entry is a [`PrimitiveValue`]. The wire form is plain JSON; see
//! [`codec`] for the decode/encode rules.

mod codec;

use indexmap::IndexMap;
use std::fmt;

/// Ordered string-keyed map of values, preserving wire order.
pub type ValueMap = IndexMap<String, PrimitiveValue>;

/// Tagged union holding any value a layout or state document can carry.
///
/// Values are never mutated in place once published; updates build new
/// instances. Equality is structural (maps compare as maps, not by order).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PrimitiveValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    #[default]
    Null,
    List(Vec<PrimitiveValue>),
    Map(ValueMap),
}

impl PrimitiveValue {
    /// Human-readable kind name for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveValue::String(_) => "string",
            PrimitiveValue::Integer(_) => "integer",
            PrimitiveValue::Float(_) => "float",
            PrimitiveValue::Boolean(_) => "boolean",
            PrimitiveValue::Null => "null",
            PrimitiveValue::List(_) => "list",
            PrimitiveValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Integer(n) => Some(*n as f64),
            PrimitiveValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrimitiveValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PrimitiveValue]> {
        match self {
            PrimitiveValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            PrimitiveValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PrimitiveValue::Null)
    }

    /// Decode a value from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode the value as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Display is the text a renderer shows for a value: strings verbatim,
/// everything else in its JSON form.
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::String(s) => f.write_str(s),
            PrimitiveValue::Integer(n) => write!(f, "{}", n),
            PrimitiveValue::Float(n) => write!(f, "{:?}", n),
            PrimitiveValue::Boolean(b) => write!(f, "{}", b),
            PrimitiveValue::Null => f.write_str("null"),
            PrimitiveValue::List(_) | PrimitiveValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::String(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::String(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        PrimitiveValue::Integer(value)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Float(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        PrimitiveValue::Boolean(value)
    }
}

impl From<Vec<PrimitiveValue>> for PrimitiveValue {
    fn from(value: Vec<PrimitiveValue>) -> Self {
        PrimitiveValue::List(value)
    }
}

impl From<ValueMap> for PrimitiveValue {
    fn from(value: ValueMap) -> Self {
        PrimitiveValue::Map(value)
    }
}
