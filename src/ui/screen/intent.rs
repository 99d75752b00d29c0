//! Intents for the screen status state machine.

use crate::ui::mvi::Intent;

use super::state::ScreenSnapshot;

/// Load lifecycle events dispatched by the session.
#[derive(Debug, Clone)]
pub enum StatusIntent {
    /// A layout fetch started (load, back, refresh, deep link).
    LoadStarted,

    /// The current fetch completed and the screen is ready.
    Loaded(ScreenSnapshot),

    /// The current fetch failed.
    Failed { message: String, can_go_back: bool },

    /// State changed while a screen is shown; publish a fresh snapshot.
    /// Ignored unless a screen is currently shown.
    Recomposed(ScreenSnapshot),
}

impl Intent for StatusIntent {}
