use std::sync::Arc;

use crate::model::ComponentNode;
use crate::state::{Resolution, StateSnapshot, StateStore};
use crate::ui::mvi::UiState;

/// Immutable view of one screen handed to renderers.
///
/// `revision` strictly increases with every publication, so two snapshots
/// of the same screen are always distinguishable even when the tree is
/// structurally identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot {
    pub screen_id: String,
    pub tree: Arc<ComponentNode>,
    /// Copy of this screen's state entries only.
    pub state: Arc<StateStore>,
    pub revision: u64,
    pub can_go_back: bool,
    /// Back-stack at publication time, current screen last.
    pub back_stack: Vec<String>,
}

impl ScreenSnapshot {
    /// Resolve a property reference against this snapshot's state.
    pub fn resolve(&self, reference: &str) -> Resolution {
        self.state.resolve(&self.screen_id, reference)
    }

    /// Current values keyed by path, without the screen prefix.
    pub fn values(&self) -> StateSnapshot {
        self.state.snapshot(&self.screen_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenStatus {
    #[default]
    Loading,
    Success(ScreenSnapshot),
    /// Fetch failed. The screen stays navigable: back is offered when the
    /// stack has a previous entry, refresh retries the failed load.
    Error { message: String, can_go_back: bool },
}

impl UiState for ScreenStatus {}

impl ScreenStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn snapshot(&self) -> Option<&ScreenSnapshot> {
        match self {
            Self::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        match self {
            Self::Loading => false,
            Self::Success(snapshot) => snapshot.can_go_back,
            Self::Error { can_go_back, .. } => *can_go_back,
        }
    }
}
