use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layouts: LayoutsConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which provider serves layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSourceKind {
    /// `<layout_id>.json` files from `fixtures_dir`.
    #[default]
    Fixtures,
    /// `GET {base_url}/dynamic-ui/screen/{layout_id}`.
    Http,
}

/// Layout source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutsConfig {
    #[serde(default)]
    pub source: LayoutSourceKind,
    /// Layout server root (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory with `<layout_id>.json` files.
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,
    /// Whole-request deadline in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Session behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Layout opened when no layout is given on the command line.
    #[serde(default = "default_initial_layout")]
    pub initial_layout: String,
    /// Warn about component ids that appear more than once in a layout.
    #[serde(default = "default_validate_unique_ids")]
    pub validate_unique_ids: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `SDUI_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("demos/layouts")
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_initial_layout() -> String {
    "home".to_string()
}

fn default_validate_unique_ids() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LayoutsConfig {
    fn default() -> Self {
        Self {
            source: LayoutSourceKind::default(),
            base_url: default_base_url(),
            fixtures_dir: default_fixtures_dir(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_layout: default_initial_layout(),
            validate_unique_ids: default_validate_unique_ids(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
