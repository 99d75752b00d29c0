use indexmap::IndexMap;

use crate::conditional::{ConditionalEvaluator, IF_NODE};
use crate::model::ComponentNode;
use crate::state::{Resolution, StateStore};
use crate::ui::screen::ScreenSnapshot;
use crate::value::PrimitiveValue;

use super::RenderError;

/// A component with its bindings dereferenced, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    pub id: String,
    pub kind: String,
    /// Binding strings are replaced by their resolution; every other value
    /// is carried as `Resolution::Value`.
    pub properties: IndexMap<String, Resolution>,
    pub children: Vec<ResolvedNode>,
    /// Events this component reacts to, in declared order.
    pub events: Vec<String>,
}

impl ResolvedNode {
    pub fn property(&self, name: &str) -> Option<&Resolution> {
        self.properties.get(name)
    }

    /// Resolved value of `name`; `None` when absent or unresolved.
    pub fn value(&self, name: &str) -> Option<&PrimitiveValue> {
        self.property(name).and_then(Resolution::value)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ResolvedNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// Resolve `tree` for `screen_id`, expanding conditionals in place.
///
/// A failing conditional fails the whole tree.
pub fn resolve_tree(
    screen_id: &str,
    tree: &ComponentNode,
    store: &StateStore,
    conditions: &ConditionalEvaluator,
) -> Result<ResolvedNode, RenderError> {
    if tree.kind == IF_NODE {
        return Err(RenderError::ConditionalRoot {
            node_id: tree.id.clone(),
        });
    }
    resolve_node(screen_id, tree, store, conditions)
}

/// Resolve the tree of a published snapshot against its own state.
pub fn resolve_snapshot(
    snapshot: &ScreenSnapshot,
    conditions: &ConditionalEvaluator,
) -> Result<ResolvedNode, RenderError> {
    resolve_tree(&snapshot.screen_id, &snapshot.tree, &snapshot.state, conditions)
}

fn resolve_node(
    screen_id: &str,
    node: &ComponentNode,
    store: &StateStore,
    conditions: &ConditionalEvaluator,
) -> Result<ResolvedNode, RenderError> {
    let properties = node
        .properties
        .iter()
        .map(|(name, value)| {
            let resolved = match value {
                PrimitiveValue::String(reference) => store.resolve(screen_id, reference),
                other => Resolution::Value(other.clone()),
            };
            (name.clone(), resolved)
        })
        .collect();

    let mut children = Vec::with_capacity(node.children.len());
    resolve_children(screen_id, &node.children, store, conditions, &mut children)?;

    Ok(ResolvedNode {
        id: node.id.clone(),
        kind: node.kind.clone(),
        properties,
        children,
        events: node
            .interactions
            .iter()
            .map(|interaction| interaction.event.clone())
            .collect(),
    })
}

fn resolve_children<'a>(
    screen_id: &str,
    nodes: impl IntoIterator<Item = &'a ComponentNode>,
    store: &StateStore,
    conditions: &ConditionalEvaluator,
    out: &mut Vec<ResolvedNode>,
) -> Result<(), RenderError> {
    for node in nodes {
        if node.kind == IF_NODE {
            let selected = conditions.select(node, screen_id, store)?;
            resolve_children(screen_id, selected, store, conditions, out)?;
        } else {
            out.push(resolve_node(screen_id, node, store, conditions)?);
        }
    }
    Ok(())
}
