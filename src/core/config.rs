//! Process-wide logger configuration

use super::level::Level;
use serde::{Deserialize, Serialize};

/// Configuration for the process-wide logger handle.
///
/// Passed once at initialization and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum severity; entries below it are dropped.
    pub level: Level,

    /// Application name, stamped on every record and used as the
    /// nesting key for app-specific fields.
    pub app_name: String,

    /// Version string stamped on every record.
    pub version: String,

    /// Maximum payload body size in bytes. 0 means unlimited.
    pub max_body_size: usize,

    /// Human-readable console output instead of JSON.
    pub readable: bool,

    /// Fixed timestamp string for deterministic output in tests.
    pub hard_coded_time: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            app_name: "unknown".to_string(),
            version: "v0.0.0".to_string(),
            max_body_size: 1_048_576,
            readable: false,
            hard_coded_time: None,
        }
    }
}
