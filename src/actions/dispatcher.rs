use crate::model::Interaction;
use crate::session::Effect;
use crate::state::StateStore;

use super::registry::{ActionContext, ActionRegistry};

/// Follow-up work an action hands back to the session, in action order.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Deliver a one-shot effect to the observer.
    Emit(Effect),
    /// Reload the current screen without pushing a back-stack entry.
    Reload,
    /// State changed; publish a new snapshot.
    Recompose,
}

/// Runs the action list of a fired event.
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    registry: ActionRegistry,
}

impl ActionDispatcher {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    /// Execute the actions of the first interaction matching `event`.
    ///
    /// Actions run sequentially in declared order against `store`. No
    /// matching interaction is a no-op. Failing and unknown actions become
    /// `ShowMessage` effects and never stop the remaining actions.
    pub fn dispatch(
        &self,
        screen_id: &str,
        component_id: &str,
        event: &str,
        interactions: &[Interaction],
        store: &mut StateStore,
    ) -> Vec<Directive> {
        let Some(interaction) = interactions.iter().find(|i| i.event == event) else {
            tracing::debug!(
                screen = %screen_id,
                component = %component_id,
                event = %event,
                "No interaction registered for event"
            );
            return Vec::new();
        };

        let mut directives = Vec::new();
        let mut ctx = ActionContext { screen_id, store };

        for (index, action) in interaction.actions.iter().enumerate() {
            let Some(handler) = self.registry.get(&action.kind) else {
                tracing::warn!(
                    screen = %screen_id,
                    component = %component_id,
                    action = %action.kind,
                    "Unhandled action type"
                );
                directives.push(Directive::Emit(Effect::ShowMessage {
                    message: format!("Unhandled action: {}", action.kind),
                }));
                continue;
            };

            match handler.execute(action, &mut ctx) {
                Ok(Some(directive)) => directives.push(directive),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        screen = %screen_id,
                        component = %component_id,
                        action = handler.name(),
                        index,
                        error = %err,
                        "Action failed"
                    );
                    directives.push(Directive::Emit(Effect::ShowMessage {
                        message: err.to_string(),
                    }));
                }
            }
        }

        directives
    }
}
