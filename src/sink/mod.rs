//! Output sinks: the consumed leveled-logging capability
//!
//! A sink owns everything downstream of the facade: output encoding,
//! timestamp formatting, caller annotation, flushing. The facade hands it
//! one finalized record per `write()` and never looks back.

pub mod capture;
pub mod console;
pub mod json;

pub use capture::{CaptureSink, CapturedRecord};
pub use console::ConsoleSink;
pub use json::JsonSink;

use crate::core::error::Result;
use crate::core::field::FieldValue;
use crate::core::level::Level;

/// Destination for finalized log records.
///
/// `fields` is an ordered sequence of key-value pairs and must be written
/// in the order given.
pub trait Sink: Send + Sync {
    fn log(
        &self,
        level: Level,
        message: &str,
        caller: &str,
        fields: &[(String, FieldValue)],
    ) -> Result<()>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Caller annotation in `dir/file.rs:line` form, trimmed to the two
/// trailing path components the way engine encoders usually do.
#[must_use]
pub fn format_caller(location: &std::panic::Location<'_>) -> String {
    let file = location.file();
    let short = match file.rmatch_indices(|c| c == '/' || c == '\\').nth(1) {
        Some((idx, _)) => &file[idx + 1..],
        None => file,
    };
    format!("{}:{}", short, location.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_caller_trims_to_two_components() {
        let caller = format_caller(std::panic::Location::caller());
        assert!(caller.starts_with("sink/mod.rs:") || caller.contains("/mod.rs:"));
        assert_eq!(caller.matches('/').count(), 1);
    }
}
