//! Status-machine primitives shared by screen sessions.
//!
//! A session never edits its published status in place. Every change is an
//! intent folded into the previous status by a reducer, and the result is
//! what watchers of the session see.
//!
//! ```text
//! SessionIntent ──→ ScreenSession ──→ StatusIntent ──→ Reducer ──→ ScreenStatus
//!                                                                      │
//!                                                          watch channel → renderer
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
