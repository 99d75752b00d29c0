use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::model::ComponentNode;

use super::error::LayoutError;
use super::LayoutSource;

/// Serves layouts from raw JSON held in memory.
///
/// Layouts are stored undecoded so a malformed fixture fails the load that
/// asks for it, the same way a bad server response would.
#[derive(Debug, Default)]
pub struct FixtureLayoutSource {
    layouts: RwLock<HashMap<String, String>>,
}

impl FixtureLayoutSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<layout_id>.json` file in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, LayoutError> {
        let read_err = |source| LayoutError::Fixtures {
            path: dir.to_path_buf(),
            source,
        };

        let source = Self::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(layout_id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let json = std::fs::read_to_string(&path).map_err(|e| LayoutError::Fixtures {
                path: path.clone(),
                source: e,
            })?;
            source.insert(layout_id, json);
        }

        tracing::debug!(dir = %dir.display(), layouts = source.len(), "Loaded layout fixtures");
        Ok(source)
    }

    /// Register or replace the layout served for `layout_id`.
    pub fn insert(&self, layout_id: impl Into<String>, json: impl Into<String>) {
        self.layouts.write().insert(layout_id.into(), json.into());
    }

    pub fn with_layout(self, layout_id: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(layout_id, json);
        self
    }

    pub fn contains(&self, layout_id: &str) -> bool {
        self.layouts.read().contains_key(layout_id)
    }

    pub fn len(&self) -> usize {
        self.layouts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.read().is_empty()
    }
}

#[async_trait]
impl LayoutSource for FixtureLayoutSource {
    async fn fetch_layout(&self, layout_id: &str) -> Result<ComponentNode, LayoutError> {
        let json = self
            .layouts
            .read()
            .get(layout_id)
            .cloned()
            .ok_or_else(|| LayoutError::NotFound {
                layout_id: layout_id.to_string(),
            })?;

        ComponentNode::from_json_str(&json).map_err(|e| LayoutError::Decode {
            layout_id: layout_id.to_string(),
            source: e,
        })
    }
}
