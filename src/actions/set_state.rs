use crate::model::Action;
use crate::state::property_path;

use super::dispatcher::Directive;
use super::error::ActionError;
use super::registry::{required_str, ActionContext, ActionHandler};

/// `setState`: copy the value resolved from `fromPath` into `toPath`.
///
/// The value keeps its kind; a list stays a list. A literal `fromPath`
/// (no `@@`) writes that string. When the source binding has no state,
/// nothing is written.
pub struct SetStateAction;

impl ActionHandler for SetStateAction {
    fn name(&self) -> &'static str {
        "setState"
    }

    fn execute(
        &self,
        action: &Action,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Option<Directive>, ActionError> {
        let to_path = property_path(required_str(action, "toPath")?).to_string();
        let value = ctx.resolve_property(action, "fromPath")?;
        ctx.store.write(ctx.screen_id, &to_path, value);
        Ok(Some(Directive::Recompose))
    }
}
