use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;

use crate::config::LayoutsConfig;
use crate::model::ComponentNode;

use super::error::LayoutError;
use super::{LayoutSource, SCREEN_ENDPOINT};

/// Fetches `GET {base_url}/dynamic-ui/screen/{layout_id}`.
pub struct HttpLayoutSource {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpLayoutSource {
    pub fn new(config: &LayoutsConfig) -> Result<Self, LayoutError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(LayoutError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    pub fn screen_url(&self, layout_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, SCREEN_ENDPOINT, layout_id)
    }

    async fn do_fetch(&self, layout_id: &str) -> Result<ComponentNode, LayoutError> {
        let url = self.screen_url(layout_id);
        tracing::debug!(layout = %layout_id, url = %url, "Fetching layout");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LayoutError::Transport {
                layout_id: layout_id.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LayoutError::Status {
                layout_id: layout_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LayoutError::Transport {
            layout_id: layout_id.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| LayoutError::Decode {
            layout_id: layout_id.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl LayoutSource for HttpLayoutSource {
    async fn fetch_layout(&self, layout_id: &str) -> Result<ComponentNode, LayoutError> {
        match timeout(self.request_timeout, self.do_fetch(layout_id)).await {
            Ok(result) => result,
            Err(_) => Err(LayoutError::Timeout {
                layout_id: layout_id.to_string(),
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}
