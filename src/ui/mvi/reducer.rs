use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into a status.
///
/// `reduce` is the only code that decides a status transition and does no
/// I/O, so every transition can be tested without a session or a runtime.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
