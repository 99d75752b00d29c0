use crate::value::{PrimitiveValue, ValueMap};

/// Flatten a nested map into dotted keys under `prefix`.
///
/// Non-empty maps recurse; every other value (including empty maps and
/// lists) is stored as a leaf. Later keys overwrite earlier ones.
pub fn flatten_into(prefix: &str, map: &ValueMap, out: &mut Vec<(String, PrimitiveValue)>) {
    for (key, value) in map {
        let joined = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            PrimitiveValue::Map(nested) if !nested.is_empty() => flatten_into(&joined, nested, out),
            leaf => out.push((joined, leaf.clone())),
        }
    }
}
