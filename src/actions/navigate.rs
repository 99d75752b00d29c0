use crate::model::Action;
use crate::session::Effect;
use crate::value::PrimitiveValue;

use super::dispatcher::Directive;
use super::error::ActionError;
use super::registry::{ActionContext, ActionHandler};

/// `navigate`: emit a one-shot navigation effect to `properties.target`.
///
/// The back-stack is not touched here; whoever consumes the effect issues
/// the load for the target, and the load pushes it.
pub struct NavigateAction;

impl ActionHandler for NavigateAction {
    fn name(&self) -> &'static str {
        "navigate"
    }

    fn execute(
        &self,
        action: &Action,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Option<Directive>, ActionError> {
        let target = match ctx.resolve_property(action, "target")? {
            PrimitiveValue::String(target) => target,
            other => {
                return Err(ActionError::InvalidProperty {
                    action: action.kind.clone(),
                    property: "target",
                    expected: "string",
                    found: other.kind(),
                })
            }
        };
        tracing::debug!(screen = %ctx.screen_id, target = %target, "Navigate requested");
        Ok(Some(Directive::Emit(Effect::Navigate { target })))
    }
}
