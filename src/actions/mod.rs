//! Declarative action pipeline.
//!
//! A component's `onInteraction` table maps event names to ordered action
//! lists. [`ActionDispatcher`] runs the list for a fired event through the
//! handlers in an [`ActionRegistry`], one action at a time, and reports what
//! the session has to do next as a sequence of [`Directive`]s.
//!
//! ```text
//! event ──→ first matching Interaction ──→ action 1 ──→ action 2 ──→ ...
//!                                            │            │
//!                                        Directive    Directive
//! ```
//!
//! Built-in handlers:
//! - `navigate` - emits a [`Effect::Navigate`](crate::session::Effect::Navigate)
//! - `refresh` - reloads the current screen without touching the back-stack
//! - `setState` - copies a resolved value from `fromPath` to `toPath`

mod dispatcher;
mod error;
mod navigate;
mod refresh;
mod registry;
mod set_state;

pub use dispatcher::{ActionDispatcher, Directive};
pub use error::ActionError;
pub use navigate::NavigateAction;
pub use refresh::RefreshAction;
pub use registry::{ActionContext, ActionHandler, ActionRegistry};
pub use set_state::SetStateAction;
