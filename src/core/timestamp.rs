//! Timestamp source for record output
//!
//! Records carry an ISO 8601 local timestamp with millisecond precision
//! and numeric offset, e.g. `2023-11-09T14:48:14.803+0700`. Tests pin the
//! value through the fixed variant.

use chrono::Local;

/// Where record timestamps come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSource {
    /// Local wall clock, formatted per the wire convention.
    System,

    /// A fixed string, emitted verbatim (deterministic test output).
    Fixed(String),
}

impl TimeSource {
    /// Build from the config's optional fixed-time override.
    #[must_use]
    pub fn from_override(hard_coded_time: Option<&str>) -> Self {
        match hard_coded_time {
            Some(t) => TimeSource::Fixed(t.to_string()),
            None => TimeSource::System,
        }
    }

    /// Current timestamp string for a record.
    #[must_use]
    pub fn now(&self) -> String {
        match self {
            TimeSource::System => Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
            TimeSource::Fixed(t) => t.clone(),
        }
    }
}

impl Default for TimeSource {
    fn default() -> Self {
        TimeSource::System
    }
}
