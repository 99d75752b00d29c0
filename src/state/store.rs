use std::collections::BTreeMap;

use crate::model::ComponentNode;
use crate::value::{PrimitiveValue, ValueMap};

use super::flatten::flatten_into;
use super::resolution::Resolution;

/// Prefix that turns a string property into a live state reference.
pub const BINDING_MARKER: &str = "@@";

/// Root property of a layout that carries its initial state.
const STATE_PROPERTY: &str = "state";

/// Per-screen view of the store handed to renderers: dotted paths without
/// the screen id.
pub type StateSnapshot = BTreeMap<String, PrimitiveValue>;

/// Strip the binding marker, if any, yielding the path a write should target.
pub fn property_path(reference: &str) -> &str {
    reference.strip_prefix(BINDING_MARKER).unwrap_or(reference)
}

/// Flat key-value state owned by one session.
///
/// Entries are addressed by `(screenId, dotted.path)`. The screen id is a
/// separate key, so ids that contain dots (`settings` and `settings.privacy`)
/// never share entries. Every accessor takes the screen id explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateStore {
    screens: BTreeMap<String, StateSnapshot>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display form of an entry address, as reported for misses.
    fn qualified(screen_id: &str, path: &str) -> String {
        format!("{}.{}", screen_id, path)
    }

    /// Resolve a property reference for `screen_id`.
    ///
    /// `"@@a.b"` looks up path `a.b` of the screen; any other string is a
    /// literal and comes back wrapped as a string value.
    pub fn resolve(&self, screen_id: &str, reference: &str) -> Resolution {
        let Some(path) = reference.strip_prefix(BINDING_MARKER) else {
            return Resolution::Value(PrimitiveValue::String(reference.to_string()));
        };
        match self.get(screen_id, path) {
            Some(value) => Resolution::Value(value.clone()),
            None => {
                let key = Self::qualified(screen_id, path);
                tracing::debug!(key = %key, "Binding has no state entry");
                Resolution::Unresolved { key }
            }
        }
    }

    /// Upsert `path` of `screen_id`.
    pub fn write(&mut self, screen_id: &str, path: &str, value: PrimitiveValue) {
        tracing::debug!(screen = %screen_id, path = %path, kind = value.kind(), "State write");
        self.screens
            .entry(screen_id.to_string())
            .or_default()
            .insert(path.to_string(), value);
    }

    /// Read one entry by screen id and dotted path.
    pub fn get(&self, screen_id: &str, path: &str) -> Option<&PrimitiveValue> {
        self.screens.get(screen_id)?.get(path)
    }

    /// Whether `screen_id` has any entry.
    pub fn has_screen(&self, screen_id: &str) -> bool {
        self.screens
            .get(screen_id)
            .is_some_and(|entries| !entries.is_empty())
    }

    /// Seed the screen's state from the tree's root `state` property.
    ///
    /// A no-op when the screen already has state, so reloading a screen
    /// (refresh, back) keeps whatever the user changed. Returns the number
    /// of entries inserted.
    pub fn seed_from_tree(&mut self, screen_id: &str, tree: &ComponentNode) -> usize {
        if self.has_screen(screen_id) {
            tracing::debug!(screen = %screen_id, "State already seeded, keeping existing entries");
            return 0;
        }
        match tree.property(STATE_PROPERTY) {
            Some(PrimitiveValue::Map(state)) => {
                let inserted = self.merge_map(screen_id, state);
                tracing::debug!(screen = %screen_id, entries = inserted, "Seeded screen state");
                inserted
            }
            Some(other) => {
                tracing::debug!(
                    screen = %screen_id,
                    kind = other.kind(),
                    "Root state property is not a map, nothing to seed"
                );
                0
            }
            None => 0,
        }
    }

    /// Flatten `value` into the screen's entries, overwriting existing paths.
    ///
    /// Returns the number of entries written; non-map values write nothing.
    pub fn merge(&mut self, screen_id: &str, value: &PrimitiveValue) -> usize {
        match value {
            PrimitiveValue::Map(map) => self.merge_map(screen_id, map),
            _ => 0,
        }
    }

    fn merge_map(&mut self, screen_id: &str, map: &ValueMap) -> usize {
        let mut flat = Vec::new();
        flatten_into("", map, &mut flat);
        let count = flat.len();
        if count > 0 {
            self.screens
                .entry(screen_id.to_string())
                .or_default()
                .extend(flat);
        }
        count
    }

    /// Copy of one screen's entries keyed by path.
    pub fn snapshot(&self, screen_id: &str) -> StateSnapshot {
        self.screens.get(screen_id).cloned().unwrap_or_default()
    }

    /// A new store holding only `screen_id`'s entries.
    pub fn scoped(&self, screen_id: &str) -> StateStore {
        let mut screens = BTreeMap::new();
        if let Some(entries) = self.screens.get(screen_id).filter(|e| !e.is_empty()) {
            screens.insert(screen_id.to_string(), entries.clone());
        }
        StateStore { screens }
    }

    /// Drop every entry of one screen.
    pub fn clear_screen(&mut self, screen_id: &str) {
        self.screens.remove(screen_id);
    }

    /// Drop all state for all screens.
    pub fn clear(&mut self) {
        self.screens.clear();
    }

    pub fn len(&self) -> usize {
        self.screens.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.values().all(BTreeMap::is_empty)
    }
}
