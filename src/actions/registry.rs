//! Action handler trait and the type-tag registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::Action;
use crate::state::{Resolution, StateStore};
use crate::value::PrimitiveValue;

use super::dispatcher::Directive;
use super::error::ActionError;
use super::navigate::NavigateAction;
use super::refresh::RefreshAction;
use super::set_state::SetStateAction;

/// What a handler may touch while running.
pub struct ActionContext<'a> {
    /// Screen whose component fired the event; scopes every state access.
    pub screen_id: &'a str,
    pub store: &'a mut StateStore,
}

impl ActionContext<'_> {
    /// Resolve a string property of `action` against the screen's state.
    ///
    /// Missing properties, non-string properties and unresolved bindings are
    /// reported as [`ActionError`]s naming the property.
    pub fn resolve_property(
        &self,
        action: &Action,
        property: &'static str,
    ) -> Result<PrimitiveValue, ActionError> {
        let reference = required_str(action, property)?;
        match self.store.resolve(self.screen_id, reference) {
            Resolution::Value(value) => Ok(value),
            Resolution::Unresolved { key } => Err(ActionError::UnresolvedBinding {
                action: action.kind.clone(),
                property,
                key,
            }),
        }
    }
}

/// Read a required string property without resolving it.
pub(super) fn required_str<'a>(
    action: &'a Action,
    property: &'static str,
) -> Result<&'a str, ActionError> {
    match action.property(property) {
        Some(PrimitiveValue::String(s)) => Ok(s),
        Some(other) => Err(ActionError::InvalidProperty {
            action: action.kind.clone(),
            property,
            expected: "string",
            found: other.kind(),
        }),
        None => Err(ActionError::MissingProperty {
            action: action.kind.clone(),
            property,
        }),
    }
}

/// Handler for one action type.
///
/// Handlers run strictly one after another, so a handler sees every state
/// write made by the actions declared before it.
pub trait ActionHandler: Send + Sync {
    /// Type tag this handler is registered under, for logging.
    fn name(&self) -> &'static str;

    /// Run the action. `Ok(None)` means nothing further for the session to do.
    fn execute(
        &self,
        action: &Action,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Option<Directive>, ActionError>;
}

/// Lookup table from action type tag to handler.
///
/// Open for extension: register a handler under a new tag without touching
/// the dispatcher.
#[derive(Clone)]
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ActionRegistry {
    /// Registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with `navigate`, `refresh` and `setState`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("navigate", NavigateAction);
        registry.register("refresh", RefreshAction);
        registry.register("setState", SetStateAction);
        registry
    }

    /// Register `handler` for `kind`, replacing any previous handler.
    pub fn register(&mut self, kind: impl Into<String>, handler: impl ActionHandler + 'static) {
        self.handlers.insert(kind.into(), Arc::new(handler));
    }

    pub fn get(&self, kind: &str) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ActionRegistry").field("kinds", &kinds).finish()
    }
}
