//! Configured logger handle and typed entry constructors

use super::config::Config;
use super::entry::{Entry, LogType};
use super::level::Level;
use super::timestamp::TimeSource;
use crate::payload::{
    AuditPayload, EventPayload, HttpRequestPayload, HttpResponsePayload, KafkaMessagePayload,
    KafkaResultPayload,
};
use crate::sink::{ConsoleSink, JsonSink, Sink};
use std::sync::Arc;

/// A configured logger: the config plus the sink records go to.
///
/// Cheap to clone; every typed constructor returns a pre-stamped
/// [`Entry`] ready for enrichment and [`Entry::write`].
#[derive(Clone)]
pub struct Logger {
    config: Arc<Config>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Build a logger from configuration, selecting JSON or readable
    /// console output per `config.readable`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let time = TimeSource::from_override(config.hard_coded_time.as_deref());
        let sink: Arc<dyn Sink> = if config.readable {
            Arc::new(ConsoleSink::new(time))
        } else {
            Arc::new(JsonSink::stdout(time))
        };

        Self {
            config: Arc::new(config),
            sink,
        }
    }

    /// Build a logger around an explicit sink. This is the test seam;
    /// production callers use [`Logger::new`].
    #[must_use]
    pub fn with_sink(config: Config, sink: Arc<dyn Sink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn entry(&self, level: Level, log_type: LogType, message: impl Into<String>) -> Entry {
        Entry::new(self.sink.clone(), self.config.clone(), level, log_type, message)
    }

    /// Application entry at an arbitrary level.
    #[must_use]
    pub fn log(&self, level: Level, message: impl Into<String>) -> Entry {
        self.entry(level, LogType::Application, message)
    }

    #[must_use]
    pub fn debug(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Debug, message)
    }

    #[must_use]
    pub fn info(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Info, message)
    }

    #[must_use]
    pub fn warn(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Warn, message)
    }

    #[must_use]
    pub fn error(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Error, message)
    }

    #[must_use]
    pub fn panic(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Panic, message)
    }

    #[must_use]
    pub fn fatal(&self, message: impl Into<String>) -> Entry {
        self.log(Level::Fatal, message)
    }

    /// Audit entry: Info level, `log_type` "audit", payload attached
    /// under `data["audit"]`.
    #[must_use]
    pub fn audit(&self, message: impl Into<String>, payload: &AuditPayload) -> Entry {
        self.entry(Level::Info, LogType::Audit, message)
            .with_audit(payload)
    }

    /// Domain event entry: Info level, `log_type` "event", payload
    /// attached under `data["event"]`.
    #[must_use]
    pub fn event(&self, message: impl Into<String>, payload: &EventPayload) -> Entry {
        self.entry(Level::Info, LogType::Event, message)
            .with_event(payload)
    }

    /// HTTP handler entry. Only the sides that are present are attached;
    /// an absent request or response never produces a key.
    #[must_use]
    pub fn http(
        &self,
        message: impl Into<String>,
        request: Option<&HttpRequestPayload>,
        response: Option<&HttpResponsePayload>,
    ) -> Entry {
        let mut entry = self.entry(Level::Info, LogType::HandlerHttp, message);
        if let Some(request) = request {
            entry = entry.with_http_request(request.clone());
        }
        if let Some(response) = response {
            entry = entry.with_http_response(response.clone());
        }
        entry
    }

    /// Kafka handler entry. Only the sides that are present are
    /// attached; an absent message or result never produces a key.
    #[must_use]
    pub fn kafka(
        &self,
        message: impl Into<String>,
        kafka_message: Option<&KafkaMessagePayload>,
        kafka_result: Option<&KafkaResultPayload>,
    ) -> Entry {
        let mut entry = self.entry(Level::Info, LogType::HandlerKafka, message);
        if let Some(kafka_message) = kafka_message {
            entry = entry.with_kafka_message(kafka_message.clone());
        }
        if let Some(kafka_result) = kafka_result {
            entry = entry.with_kafka_result(kafka_result.clone());
        }
        entry
    }

    /// Flush the sink. Normally unnecessary; shutdown hooks may want it.
    pub fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            eprintln!("[svclog] failed to flush sink: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::payload::{AuditAction, EventAction, EventResult};
    use crate::sink::CaptureSink;

    fn capture_logger() -> (Logger, Arc<CaptureSink>) {
        let sink = Arc::new(CaptureSink::new());
        let config = Config {
            app_name: "sampleApp".to_string(),
            version: "v1.0.0".to_string(),
            level: Level::Debug,
            ..Config::default()
        };
        (Logger::with_sink(config, sink.clone()), sink)
    }

    #[test]
    fn test_level_family_stamps() {
        let (logger, sink) = capture_logger();

        logger.debug("d").write();
        logger.info("i").write();
        logger.warn("w").write();
        logger.error("e").write();
        logger.panic("p").write();
        logger.fatal("f").write();

        let records = sink.records();
        assert_eq!(records.len(), 6);
        let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Debug,
                Level::Info,
                Level::Warn,
                Level::Error,
                Level::Panic,
                Level::Fatal
            ]
        );
        for record in &records {
            assert_eq!(
                record.field("log_type"),
                Some(&FieldValue::String("application".to_string()))
            );
        }
    }

    #[test]
    fn test_audit_attaches_payload() {
        let (logger, sink) = capture_logger();
        let payload = AuditPayload {
            actor_type: "user".to_string(),
            actor_id: "USR_1".to_string(),
            action: AuditAction::Access,
            entity: "order".to_string(),
            entity_refs: vec!["ORD_1".to_string()],
            entity_owner_type: "store".to_string(),
            entity_owner_id: "STR_1".to_string(),
        };

        logger.audit("Audit message", &payload).write();

        let record = sink.last().unwrap();
        assert_eq!(
            record.field("log_type"),
            Some(&FieldValue::String("audit".to_string()))
        );
        assert_eq!(
            record.data().unwrap().get("audit"),
            Some(&FieldValue::from_serialize(&payload))
        );
    }

    #[test]
    fn test_event_attaches_payload() {
        let (logger, sink) = capture_logger();
        let payload = EventPayload::new(
            "order",
            "ODR_1",
            EventAction::Create,
            EventResult::Success,
            "created",
        );

        logger.event("Event message", &payload).write();

        let record = sink.last().unwrap();
        assert_eq!(
            record.field("log_type"),
            Some(&FieldValue::String("event".to_string()))
        );
        assert!(record.data().unwrap().contains_key("event"));
    }

    #[test]
    fn test_http_omits_absent_sides() {
        let (logger, sink) = capture_logger();
        let request = HttpRequestPayload {
            method: "GET".to_string(),
            ..Default::default()
        };

        logger.http("received", Some(&request), None).write();

        let data = sink.last().unwrap();
        let data = data.data().unwrap();
        assert!(data.contains_key("http_request"));
        assert!(!data.contains_key("http_response"));

        logger.http("no payloads", None, None).write();
        let data = sink.last().unwrap();
        let data = data.data().unwrap();
        assert!(!data.contains_key("http_request"));
        assert!(!data.contains_key("http_response"));
    }

    #[test]
    fn test_kafka_omits_absent_sides() {
        let (logger, sink) = capture_logger();
        let result = KafkaResultPayload {
            duration: 3000.0,
            committed: true,
            error: None,
        };

        logger.kafka("processed", None, Some(&result)).write();

        let record = sink.last().unwrap();
        assert_eq!(
            record.field("log_type"),
            Some(&FieldValue::String("handler.kafka".to_string()))
        );
        let data = record.data().unwrap();
        assert!(data.contains_key("kafka_result"));
        assert!(!data.contains_key("kafka_message"));
    }
}
