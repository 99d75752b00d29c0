//! Declarative UI tree delivered by the server.
//!
//! # Wire format
//!
//! ```text
//! { "id": string, "type": string,
//!   "properties": { <name>: <value> },
//!   "children": [ ComponentNode ],
//!   "onInteraction": [ { "event": string, "action": [ { "type": string, "properties": {..} } ] } ] }
//! ```
//!
//! Everything except `id` and `type` defaults to empty when absent.

mod component;

pub use component::{Action, ComponentNode, Interaction};
