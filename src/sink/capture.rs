//! Record-capturing sink for tests
//!
//! Lets a test (or a consumer's test suite) assert on exactly what the
//! facade emitted without parsing any output stream.

use super::Sink;
use crate::core::error::Result;
use crate::core::field::FieldValue;
use crate::core::level::Level;
use parking_lot::Mutex;

/// One finalized record as the sink received it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub caller: String,
    pub fields: Vec<(String, FieldValue)>,
}

impl CapturedRecord {
    /// Look up a top-level field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The record's `data` map, when present.
    #[must_use]
    pub fn data(&self) -> Option<&std::collections::HashMap<String, FieldValue>> {
        match self.field("data") {
            Some(FieldValue::Map(m)) => Some(m),
            _ => None,
        }
    }
}

/// Sink that stores every record it receives.
#[derive(Default)]
pub struct CaptureSink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<CapturedRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for CaptureSink {
    fn log(
        &self,
        level: Level,
        message: &str,
        caller: &str,
        fields: &[(String, FieldValue)],
    ) -> Result<()> {
        self.records.lock().push(CapturedRecord {
            level,
            message: message.to_string(),
            caller: caller.to_string(),
            fields: fields.to_vec(),
        });
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_lookup() {
        let sink = CaptureSink::new();
        sink.log(
            Level::Info,
            "hello",
            "a/b.rs:1",
            &[("alert".to_string(), FieldValue::Int(0))],
        )
        .unwrap();

        assert_eq!(sink.len(), 1);
        let record = sink.last().unwrap();
        assert_eq!(record.message, "hello");
        assert_eq!(record.field("alert"), Some(&FieldValue::Int(0)));
        assert!(record.field("missing").is_none());
    }

    #[test]
    fn test_clear() {
        let sink = CaptureSink::new();
        sink.log(Level::Debug, "x", "a/b.rs:1", &[]).unwrap();
        sink.clear();
        assert!(sink.is_empty());
    }
}
