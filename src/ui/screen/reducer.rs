//! Reducer for the screen status.

use crate::ui::mvi::Reducer;

use super::intent::StatusIntent;
use super::state::ScreenStatus;

/// Reducer for screen status transitions.
///
/// Pure function. Fetching, staleness checks and state writes are handled
/// by the session around the dispatch call.
pub struct ScreenStatusReducer;

impl Reducer for ScreenStatusReducer {
    type State = ScreenStatus;
    type Intent = StatusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StatusIntent::LoadStarted => ScreenStatus::Loading,

            StatusIntent::Loaded(snapshot) => ScreenStatus::Success(snapshot),

            StatusIntent::Failed {
                message,
                can_go_back,
            } => ScreenStatus::Error {
                message,
                can_go_back,
            },

            StatusIntent::Recomposed(snapshot) => match state {
                ScreenStatus::Success(_) => ScreenStatus::Success(snapshot),
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentNode;
    use crate::state::StateStore;
    use crate::ui::screen::ScreenSnapshot;
    use std::sync::Arc;

    fn snapshot(revision: u64) -> ScreenSnapshot {
        ScreenSnapshot {
            screen_id: "home".into(),
            tree: Arc::new(ComponentNode::new("root", "container")),
            state: Arc::new(StateStore::new()),
            revision,
            can_go_back: false,
            back_stack: vec!["home".into()],
        }
    }

    #[test]
    fn loading_loaded_transitions_to_success() {
        let new = ScreenStatusReducer::reduce(ScreenStatus::Loading, StatusIntent::Loaded(snapshot(1)));
        assert!(matches!(new, ScreenStatus::Success(s) if s.revision == 1));
    }

    #[test]
    fn success_load_started_goes_back_to_loading() {
        let new = ScreenStatusReducer::reduce(
            ScreenStatus::Success(snapshot(1)),
            StatusIntent::LoadStarted,
        );
        assert!(new.is_loading());
    }

    #[test]
    fn error_load_started_goes_back_to_loading() {
        let state = ScreenStatus::Error {
            message: "boom".into(),
            can_go_back: true,
        };
        let new = ScreenStatusReducer::reduce(state, StatusIntent::LoadStarted);
        assert!(new.is_loading());
    }

    #[test]
    fn recompose_replaces_success_snapshot() {
        let new = ScreenStatusReducer::reduce(
            ScreenStatus::Success(snapshot(1)),
            StatusIntent::Recomposed(snapshot(2)),
        );
        assert_eq!(new.snapshot().map(|s| s.revision), Some(2));
    }

    #[test]
    fn recompose_while_loading_is_noop() {
        let new = ScreenStatusReducer::reduce(ScreenStatus::Loading, StatusIntent::Recomposed(snapshot(2)));
        assert!(new.is_loading());
    }

    #[test]
    fn failed_keeps_back_navigation() {
        let new = ScreenStatusReducer::reduce(
            ScreenStatus::Loading,
            StatusIntent::Failed {
                message: "No layout found for id: x".into(),
                can_go_back: true,
            },
        );
        assert!(new.can_go_back());
        assert!(matches!(new, ScreenStatus::Error { ref message, .. } if message.contains("x")));
    }
}
