//! Flat, screen-scoped state store and `@@` binding resolution.
//!
//! State is addressed by screen id plus a dotted path. Nested server state
//! is flattened into paths once per screen; bindings in component
//! properties (`"@@usage.data"`) dereference into the current screen's paths.

mod flatten;
mod resolution;
mod store;

pub use flatten::flatten_into;
pub use resolution::Resolution;
pub use store::{property_path, StateSnapshot, StateStore, BINDING_MARKER};
