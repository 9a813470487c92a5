//! JSON sink for machine-encoded output
//!
//! Writes each record as a single-line JSON object (JSONL), compatible
//! with log aggregation tools like ELK and Loki. Top-level keys come in a
//! fixed order: `level`, `timestamp`, `caller`, `message`, then the
//! facade's fields in the order given.

use super::Sink;
use crate::core::error::Result;
use crate::core::field::FieldValue;
use crate::core::level::Level;
use crate::core::timestamp::TimeSource;
use parking_lot::Mutex;
use std::io::Write;

pub struct JsonSink {
    writer: Mutex<Box<dyn Write + Send>>,
    time: TimeSource,
}

impl JsonSink {
    /// JSON sink writing to standard output.
    pub fn stdout(time: TimeSource) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), time)
    }

    /// JSON sink writing to an arbitrary writer; test harnesses pass a
    /// shared buffer here.
    pub fn with_writer(writer: Box<dyn Write + Send>, time: TimeSource) -> Self {
        Self {
            writer: Mutex::new(writer),
            time,
        }
    }
}

impl Sink for JsonSink {
    fn log(
        &self,
        level: Level,
        message: &str,
        caller: &str,
        fields: &[(String, FieldValue)],
    ) -> Result<()> {
        let mut record = serde_json::Map::new();
        record.insert(
            "level".to_string(),
            serde_json::Value::String(level.as_str().to_string()),
        );
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(self.time.now()),
        );
        record.insert(
            "caller".to_string(),
            serde_json::Value::String(caller.to_string()),
        );
        record.insert(
            "message".to_string(),
            serde_json::Value::String(message.to_string()),
        );
        for (key, value) in fields {
            record.insert(key.clone(), value.to_json_value());
        }

        let line = serde_json::to_string(&serde_json::Value::Object(record))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PMutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<PMutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).expect("utf8 output")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_envelope_shape_and_field_order() {
        let buf = SharedBuf::default();
        let sink = JsonSink::with_writer(
            Box::new(buf.clone()),
            TimeSource::Fixed("2023-11-09T14:48:14.803+0700".to_string()),
        );

        let fields = vec![
            ("app_name".to_string(), FieldValue::from("sampleApp")),
            ("alert".to_string(), FieldValue::Int(0)),
        ];
        sink.log(Level::Info, "hello", "demo/main.rs:10", &fields)
            .unwrap();

        let line = buf.contents();
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["timestamp"], "2023-11-09T14:48:14.803+0700");
        assert_eq!(parsed["caller"], "demo/main.rs:10");
        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["app_name"], "sampleApp");
        assert_eq!(parsed["alert"], 0);

        // fields keep the given order after the envelope keys
        let level_pos = line.find("\"level\"").unwrap();
        let app_pos = line.find("\"app_name\"").unwrap();
        let alert_pos = line.find("\"alert\"").unwrap();
        assert!(level_pos < app_pos && app_pos < alert_pos);
    }

    #[test]
    fn test_one_line_per_record() {
        let buf = SharedBuf::default();
        let sink = JsonSink::with_writer(Box::new(buf.clone()), TimeSource::System);

        for i in 0..3 {
            sink.log(Level::Warn, &format!("m{}", i), "a/b.rs:1", &[])
                .unwrap();
        }

        assert_eq!(buf.contents().lines().count(), 3);
    }
}
