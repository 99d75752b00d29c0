use crate::layout::LayoutError;
use crate::model::ComponentNode;
use crate::ui::mvi::Intent;
use crate::value::PrimitiveValue;

/// How a successful load changes the back-stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Forward navigation: push the screen.
    Push,
    /// Reload of the current top (refresh, back): leave the stack alone.
    Replace,
    /// Deep link: clear stack and state, then push.
    Reset,
}

/// Identifies one layout fetch. Only the ticket carrying the session's
/// latest generation is applied; every older one is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub layout_id: String,
    pub mode: LoadMode,
}

/// Everything that can change a session, from the UI or from I/O.
#[derive(Debug)]
pub enum SessionIntent {
    /// Forward navigation to a screen.
    LoadLayout { layout_id: String },

    /// Open a screen as the new root of the back-stack.
    DeepLink { layout_id: String },

    /// Return to the previous screen.
    Back,

    /// Reload the current screen, or retry the load that failed.
    Refresh,

    /// The renderer reported an event on a component.
    Interaction {
        layout_id: String,
        component_id: String,
        event: String,
    },

    /// The renderer edited a bound value (text input, selection).
    UpdateState {
        layout_id: String,
        path: String,
        value: PrimitiveValue,
    },

    /// Server data for a screen, merged into its state.
    DataArrived {
        layout_id: String,
        payload: PrimitiveValue,
    },

    /// A layout fetch finished.
    LayoutFetched {
        ticket: LoadTicket,
        result: Result<ComponentNode, LayoutError>,
    },
}

impl Intent for SessionIntent {}

impl SessionIntent {
    pub fn load(layout_id: impl Into<String>) -> Self {
        Self::LoadLayout {
            layout_id: layout_id.into(),
        }
    }

    pub fn deep_link(layout_id: impl Into<String>) -> Self {
        Self::DeepLink {
            layout_id: layout_id.into(),
        }
    }

    pub fn interaction(
        layout_id: impl Into<String>,
        component_id: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self::Interaction {
            layout_id: layout_id.into(),
            component_id: component_id.into(),
            event: event.into(),
        }
    }

    pub fn update_state(
        layout_id: impl Into<String>,
        path: impl Into<String>,
        value: impl Into<PrimitiveValue>,
    ) -> Self {
        Self::UpdateState {
            layout_id: layout_id.into(),
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn data_arrived(layout_id: impl Into<String>, payload: PrimitiveValue) -> Self {
        Self::DataArrived {
            layout_id: layout_id.into(),
            payload,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadLayout { .. } => "load_layout",
            Self::DeepLink { .. } => "deep_link",
            Self::Back => "back",
            Self::Refresh => "refresh",
            Self::Interaction { .. } => "interaction",
            Self::UpdateState { .. } => "update_state",
            Self::DataArrived { .. } => "data_arrived",
            Self::LayoutFetched { .. } => "layout_fetched",
        }
    }
}
