//! Rendering boundary.
//!
//! A renderer never reads the state store directly. [`resolve_tree`] turns a
//! published tree into [`ResolvedNode`]s with every binding dereferenced and
//! every `_if` expanded; a [`Renderer`] turns that into a view.

mod outline;
mod resolve;

use thiserror::Error;

use crate::conditional::ConditionError;

pub use outline::{Formatter, OutlineRenderer, UNSUPPORTED_PREFIX};
pub use resolve::{resolve_snapshot, resolve_tree, ResolvedNode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error("Root component '{node_id}' cannot be a conditional")]
    ConditionalRoot { node_id: String },
}

/// Turns a resolved tree into a view.
pub trait Renderer {
    type View;

    fn render(&mut self, node: &ResolvedNode) -> Self::View;
}
