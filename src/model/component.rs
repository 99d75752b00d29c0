use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::{PrimitiveValue, ValueMap};

/// One node of a server-supplied UI tree.
///
/// Ids should be unique within a tree but decoding does not enforce it;
/// lookups are first-match-wins. See [`ComponentNode::duplicate_ids`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: ValueMap,
    #[serde(default)]
    pub children: Vec<ComponentNode>,
    #[serde(rename = "onInteraction", default)]
    pub interactions: Vec<Interaction>,
}

/// Maps one event name to the actions it fires, in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub event: String,
    #[serde(rename = "action", default)]
    pub actions: Vec<Action>,
}

/// A declarative action (`navigate`, `refresh`, `setState`, ...).
///
/// Conditions of `_if` nodes share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: ValueMap,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            properties: ValueMap::new(),
            children: Vec::new(),
            interactions: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PrimitiveValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Decode a tree from its JSON wire form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn property(&self, name: &str) -> Option<&PrimitiveValue> {
        self.properties.get(name)
    }

    /// Depth-first pre-order search; the first node with `id` wins.
    pub fn find_by_id(&self, id: &str) -> Option<&ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    ///
    /// Only call this on a tree obtained from [`deep_copy`](Self::deep_copy)
    /// that has not been published yet.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Structural clone sharing nothing with `self`.
    ///
    /// Properties, children and interactions are all owned, so the copy can
    /// be mutated without a previously published snapshot observing it.
    pub fn deep_copy(&self) -> ComponentNode {
        self.clone()
    }

    /// Actions registered for `event`, from the first matching interaction.
    pub fn actions_for(&self, event: &str) -> Option<&[Action]> {
        self.interactions
            .iter()
            .find(|interaction| interaction.event == event)
            .map(|interaction| interaction.actions.as_slice())
    }

    /// Ids that occur more than once in this tree, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        self.visit(&mut |node| {
            let count = counts.entry(node.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(node.id.clone());
            }
        });
        order
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a ComponentNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

impl Interaction {
    pub fn new(event: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            event: event.into(),
            actions,
        }
    }
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: ValueMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PrimitiveValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&PrimitiveValue> {
        self.properties.get(name)
    }

    /// Read an action-shaped descriptor stored as a map value, e.g. the
    /// `condition` property of an `_if` node.
    pub fn from_value(value: &PrimitiveValue) -> Option<Action> {
        let map = value.as_map()?;
        let kind = map.get("type")?.as_str()?.to_string();
        let properties = match map.get("properties") {
            Some(PrimitiveValue::Map(props)) => props.clone(),
            Some(_) => return None,
            None => ValueMap::new(),
        };
        Some(Action { kind, properties })
    }
}
