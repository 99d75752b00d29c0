//! `_if` / `_then` / `_else` evaluation.
//!
//! An `_if` node carries a `condition` property shaped like an action
//! (`{type, properties}`) and has exactly one `_then` child; every other
//! child is an else-branch container. Conditions are structural: an unknown
//! condition type or a malformed `_if` is an error, never a silent fallback.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{Action, ComponentNode};
use crate::state::StateStore;

pub const IF_NODE: &str = "_if";
pub const THEN_NODE: &str = "_then";
pub const ELSE_NODE: &str = "_else";

/// Errors that make an `_if` node impossible to evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionError {
    #[error("Conditional '{node_id}' has no condition")]
    MissingCondition { node_id: String },

    #[error("Conditional '{node_id}' has a condition without a type")]
    MalformedCondition { node_id: String },

    #[error("Unsupported condition type '{kind}' on '{node_id}'")]
    UnsupportedType { node_id: String, kind: String },

    #[error("Condition '{kind}' on '{node_id}' is missing property '{property}'")]
    MissingProperty {
        node_id: String,
        kind: String,
        property: &'static str,
    },

    #[error("Conditional '{node_id}' must have exactly one _then child, found {found}")]
    ThenBranchCount { node_id: String, found: usize },
}

/// Which branch of an `_if` node was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Then,
    Else,
}

/// Evaluates one condition type.
pub trait ConditionHandler: Send + Sync {
    fn evaluate(
        &self,
        node_id: &str,
        condition: &Action,
        screen_id: &str,
        store: &StateStore,
    ) -> Result<bool, ConditionError>;
}

/// `getState`: passes when `properties.fromPath` resolves to any state.
pub struct GetStateCondition;

impl ConditionHandler for GetStateCondition {
    fn evaluate(
        &self,
        node_id: &str,
        condition: &Action,
        screen_id: &str,
        store: &StateStore,
    ) -> Result<bool, ConditionError> {
        let path = condition
            .property("fromPath")
            .and_then(|value| value.as_str())
            .ok_or_else(|| ConditionError::MissingProperty {
                node_id: node_id.to_string(),
                kind: condition.kind.clone(),
                property: "fromPath",
            })?;
        Ok(!store.resolve(screen_id, path).is_unresolved())
    }
}

/// Condition type tag → handler.
#[derive(Clone)]
pub struct ConditionalEvaluator {
    handlers: HashMap<String, Arc<dyn ConditionHandler>>,
}

impl Default for ConditionalEvaluator {
    fn default() -> Self {
        let mut evaluator = Self {
            handlers: HashMap::new(),
        };
        evaluator.register("getState", GetStateCondition);
        evaluator
    }
}

impl std::fmt::Debug for ConditionalEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ConditionalEvaluator")
            .field("kinds", &kinds)
            .finish()
    }
}

impl ConditionalEvaluator {
    pub fn register(&mut self, kind: impl Into<String>, handler: impl ConditionHandler + 'static) {
        self.handlers.insert(kind.into(), Arc::new(handler));
    }

    /// Evaluate the `condition` of an `_if` node.
    pub fn evaluate(
        &self,
        node: &ComponentNode,
        screen_id: &str,
        store: &StateStore,
    ) -> Result<Branch, ConditionError> {
        let raw = node
            .property("condition")
            .ok_or_else(|| ConditionError::MissingCondition {
                node_id: node.id.clone(),
            })?;
        let condition = Action::from_value(raw).ok_or_else(|| ConditionError::MalformedCondition {
            node_id: node.id.clone(),
        })?;
        let handler = self
            .handlers
            .get(&condition.kind)
            .ok_or_else(|| ConditionError::UnsupportedType {
                node_id: node.id.clone(),
                kind: condition.kind.clone(),
            })?;

        let passed = handler.evaluate(&node.id, &condition, screen_id, store)?;
        tracing::debug!(
            node = %node.id,
            condition = %condition.kind,
            passed,
            "Evaluated conditional"
        );
        Ok(if passed { Branch::Then } else { Branch::Else })
    }

    /// Children to render in place of an `_if` node.
    ///
    /// On `Then` these are the `_then` child's children. On `Else` they are
    /// the children of every other child, in order; the else containers
    /// themselves render nothing.
    pub fn select<'a>(
        &self,
        node: &'a ComponentNode,
        screen_id: &str,
        store: &StateStore,
    ) -> Result<Vec<&'a ComponentNode>, ConditionError> {
        let then_count = node.children.iter().filter(|c| c.kind == THEN_NODE).count();
        if then_count != 1 {
            return Err(ConditionError::ThenBranchCount {
                node_id: node.id.clone(),
                found: then_count,
            });
        }

        let selected = match self.evaluate(node, screen_id, store)? {
            Branch::Then => node
                .children
                .iter()
                .filter(|c| c.kind == THEN_NODE)
                .flat_map(|c| c.children.iter())
                .collect(),
            Branch::Else => node
                .children
                .iter()
                .filter(|c| c.kind != THEN_NODE)
                .flat_map(|c| c.children.iter())
                .collect(),
        };
        Ok(selected)
    }
}
