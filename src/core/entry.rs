//! Log entry builder
//!
//! An [`Entry`] accumulates the pieces of one record through chained
//! with-style calls and serializes exactly once in [`Entry::write`].
//! Every enrichment returns a new value; cloning an entry and extending
//! the clones independently never lets one chain observe the other's
//! additions.

use super::config::Config;
use super::field::FieldValue;
use super::level::Level;
use super::stacktrace::capture_stack_trace;
use super::trace::SpanContext;
use crate::payload::{
    AuditPayload, EventPayload, HttpRequestPayload, HttpResponsePayload, KafkaMessagePayload,
    KafkaResultPayload,
};
use crate::sink::{format_caller, Sink};
use std::collections::HashMap;
use std::sync::Arc;

/// Record taxonomy tag, emitted as `log_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Application,
    Audit,
    Event,
    HandlerHttp,
    HandlerKafka,
}

impl LogType {
    /// Wire name of the tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Application => "application",
            LogType::Audit => "audit",
            LogType::Event => "event",
            LogType::HandlerHttp => "handler.http",
            LogType::HandlerKafka => "handler.kafka",
        }
    }
}

/// One in-progress log record.
///
/// # Example
///
/// ```no_run
/// use svclog::{Config, Logger};
///
/// let logger = Logger::new(Config::default());
///
/// logger
///     .info("Request processed")
///     .with_field("user_id", 12345_i64)
///     .with_field("latency_ms", 42.5)
///     .write();
/// ```
#[derive(Clone)]
pub struct Entry {
    sink: Arc<dyn Sink>,
    config: Arc<Config>,
    log_type: LogType,
    level: Level,
    alert: bool,
    message: String,
    data: HashMap<String, FieldValue>,
    app_fields: HashMap<String, FieldValue>,
}

impl Entry {
    pub(crate) fn new(
        sink: Arc<dyn Sink>,
        config: Arc<Config>,
        level: Level,
        log_type: LogType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            config,
            log_type,
            level,
            alert: false,
            message: message.into(),
            data: HashMap::new(),
            app_fields: HashMap::new(),
        }
    }

    /// Set or override the message.
    #[must_use]
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set or override the level.
    #[must_use]
    pub fn set_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set or override the alert flag, emitted as 0/1.
    #[must_use]
    pub fn set_alert(mut self, alert: bool) -> Self {
        self.alert = alert;
        self
    }

    /// Add a field to the record's `data` map. Later writes to the same
    /// key win.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Merge multiple fields into `data`.
    #[must_use]
    pub fn with_fields(mut self, fields: HashMap<String, FieldValue>) -> Self {
        for (key, value) in fields {
            self.data.insert(key, value);
        }
        self
    }

    /// Add an application-specific field. App fields stay out of `data`
    /// until finalization, when they nest under the configured app name.
    #[must_use]
    pub fn with_app_data(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.app_fields.insert(key.into(), value.into());
        self
    }

    /// Record an error's message under `data["error"]`.
    ///
    /// `None` leaves the entry untouched; no key is ever added for an
    /// absent error.
    #[must_use]
    pub fn with_error(self, err: Option<&dyn std::error::Error>) -> Self {
        match err {
            Some(e) => self.with_field("error", e.to_string()),
            None => self,
        }
    }

    /// Attach trace/span identifiers under `data["tracing"]`.
    #[must_use]
    pub fn with_tracing(self, span: &dyn SpanContext) -> Self {
        let mut tracing = HashMap::new();
        tracing.insert(
            "trace_id".to_string(),
            FieldValue::String(span.trace_id()),
        );
        tracing.insert("span_id".to_string(), FieldValue::String(span.span_id()));
        self.with_field("tracing", tracing)
    }

    /// Capture the current call stack under `data["stack_trace"]`.
    #[must_use]
    pub fn with_stack_trace(self) -> Self {
        // skip this adapter frame so the trace starts at the caller
        self.with_field("stack_trace", capture_stack_trace(1))
    }

    /// Associate a session id, generating one when the caller has none.
    #[must_use]
    pub fn with_session(self, session_id: Option<&str>) -> Self {
        let id = match session_id {
            Some(s) => s.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        };
        self.with_field("session_id", id)
    }

    /// Attach an HTTP request under `data["http_request"]`, capping its
    /// body at the configured size.
    #[must_use]
    pub fn with_http_request(self, mut request: HttpRequestPayload) -> Self {
        self.cap_string(&mut request.body);
        let value = FieldValue::from_serialize(&request);
        self.with_field("http_request", value)
    }

    /// Attach an HTTP response under `data["http_response"]`, capping its
    /// body at the configured size.
    #[must_use]
    pub fn with_http_response(self, mut response: HttpResponsePayload) -> Self {
        self.cap_string(&mut response.body);
        let value = FieldValue::from_serialize(&response);
        self.with_field("http_response", value)
    }

    /// Attach a Kafka message under `data["kafka_message"]`, capping its
    /// payload at the configured size.
    #[must_use]
    pub fn with_kafka_message(self, mut message: KafkaMessagePayload) -> Self {
        self.cap_bytes(&mut message.payload);
        let value = FieldValue::from_serialize(&message);
        self.with_field("kafka_message", value)
    }

    /// Attach a Kafka handling result under `data["kafka_result"]`.
    #[must_use]
    pub fn with_kafka_result(self, result: KafkaResultPayload) -> Self {
        let value = FieldValue::from_serialize(&result);
        self.with_field("kafka_result", value)
    }

    pub(crate) fn with_audit(self, payload: &AuditPayload) -> Self {
        let value = FieldValue::from_serialize(payload);
        self.with_field("audit", value)
    }

    pub(crate) fn with_event(self, payload: &EventPayload) -> Self {
        let value = FieldValue::from_serialize(payload);
        self.with_field("event", value)
    }

    /// Finalize and emit the record.
    ///
    /// Entries below the configured severity threshold are dropped. Sink
    /// failures are reported to stderr and never surfaced; a log call is
    /// fire-and-forget.
    #[track_caller]
    pub fn write(self) {
        if self.level < self.config.level {
            return;
        }

        let caller = format_caller(std::panic::Location::caller());

        let mut data = self.data;
        if !self.app_fields.is_empty() {
            data.insert(
                self.config.app_name.clone(),
                FieldValue::Map(self.app_fields),
            );
        }

        let fields = vec![
            (
                "app_name".to_string(),
                FieldValue::String(self.config.app_name.clone()),
            ),
            (
                "version".to_string(),
                FieldValue::String(self.config.version.clone()),
            ),
            ("alert".to_string(), FieldValue::Int(i64::from(self.alert))),
            (
                "log_type".to_string(),
                FieldValue::String(self.log_type.as_str().to_string()),
            ),
            ("data".to_string(), FieldValue::Map(data)),
        ];

        if let Err(e) = self.sink.log(self.level, &self.message, &caller, &fields) {
            eprintln!("[svclog] failed to write record: {}", e);
        }
    }

    /// Byte-prefix cap for string bodies, floored to a char boundary.
    fn cap_string(&self, body: &mut String) {
        let max = self.config.max_body_size;
        if max > 0 && body.len() > max {
            let mut cut = max;
            while cut > 0 && !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
    }

    fn cap_bytes(&self, payload: &mut Vec<u8>) {
        let max = self.config.max_body_size;
        if max > 0 && payload.len() > max {
            payload.truncate(max);
        }
    }
}
