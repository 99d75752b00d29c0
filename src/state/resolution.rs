use std::fmt;

use crate::value::PrimitiveValue;

/// Outcome of resolving a property reference against the state store.
///
/// A miss is its own variant so that a binding with no state behind it can
/// never be mistaken for a legitimately empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A bound state value, or a literal wrapped as a string.
    Value(PrimitiveValue),
    /// No state entry exists for the composite key.
    Unresolved { key: String },
}

impl Resolution {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved { .. })
    }

    pub fn value(&self) -> Option<&PrimitiveValue> {
        match self {
            Resolution::Value(value) => Some(value),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<PrimitiveValue> {
        match self {
            Resolution::Value(value) => Some(value),
            Resolution::Unresolved { .. } => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Value(value) => write!(f, "{}", value),
            Resolution::Unresolved { key } => write!(f, "NO STATE FOR PATH {}", key),
        }
    }
}
