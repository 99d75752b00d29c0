use crate::model::Action;

use super::dispatcher::Directive;
use super::error::ActionError;
use super::registry::{ActionContext, ActionHandler};

/// `refresh`: reload the current screen in place.
pub struct RefreshAction;

impl ActionHandler for RefreshAction {
    fn name(&self) -> &'static str {
        "refresh"
    }

    fn execute(
        &self,
        _action: &Action,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Option<Directive>, ActionError> {
        tracing::debug!(screen = %ctx.screen_id, "Refresh requested");
        Ok(Some(Directive::Reload))
    }
}
