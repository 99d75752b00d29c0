//! Screen status feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Status enum (Loading → Success | Error) and the published snapshot
//! - `intent.rs` - Load lifecycle events (LoadStarted, Loaded, Failed, Recomposed)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::StatusIntent;
pub use reducer::ScreenStatusReducer;
pub use state::{ScreenSnapshot, ScreenStatus};
