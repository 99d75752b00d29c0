//! Screen session orchestration.
//!
//! [`ScreenSession`] is the synchronous state machine: it owns the back-stack,
//! the state store and the shown tree, and turns intents into status
//! publications and effects. [`SessionDriver`] runs it on a tokio task and
//! performs the layout fetches it asks for.

mod driver;
mod effect;
mod intent;
mod screen;

pub use driver::{SessionDriver, SessionError, SessionHandle};
pub use effect::Effect;
pub use intent::{LoadMode, LoadTicket, SessionIntent};
pub use screen::ScreenSession;
