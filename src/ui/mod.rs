//! Screen-level UI state.
//!
//! The status of a screen session (loading, showing a snapshot, failed) is
//! an MVI state machine driven by [`screen::StatusIntent`]s.

pub mod mvi;
pub mod screen;
