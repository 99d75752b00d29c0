use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while fetching or decoding a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// No layout registered under this id
    #[error("No layout found for id: {layout_id}")]
    NotFound { layout_id: String },

    /// Server answered with a non-success status
    #[error("Layout '{layout_id}' request failed with status {status}")]
    Status { layout_id: String, status: u16 },

    /// Body was not a valid component tree
    #[error("Layout '{layout_id}' is not a valid component tree: {source}")]
    Decode {
        layout_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection or transfer failure
    #[error("Failed to fetch layout '{layout_id}': {source}")]
    Transport {
        layout_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Fetch exceeded the request deadline
    #[error("Layout '{layout_id}' timed out after {seconds}s")]
    Timeout { layout_id: String, seconds: u64 },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Fixture directory could not be read
    #[error("Failed to read layout fixtures from {path}: {source}")]
    Fixtures {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
