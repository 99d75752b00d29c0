//! Where layouts come from.
//!
//! The session only sees [`LayoutSource`]; the HTTP and fixture sources are
//! the two concrete providers the binary can pick between.

mod error;
mod fixtures;
mod http;

use async_trait::async_trait;

use crate::model::ComponentNode;

pub use error::LayoutError;
pub use fixtures::FixtureLayoutSource;
pub use http::HttpLayoutSource;

/// Path segment the layout server serves screens under.
pub const SCREEN_ENDPOINT: &str = "dynamic-ui/screen";

/// Fetches a layout tree by id.
///
/// Implementations must be safe to call concurrently; the session spawns one
/// fetch per load and may have a superseded one still in flight.
#[async_trait]
pub trait LayoutSource: Send + Sync {
    async fn fetch_layout(&self, layout_id: &str) -> Result<ComponentNode, LayoutError>;
}
