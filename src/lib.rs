//! # svclog
//!
//! A structured-logging facade that standardizes the shape of log output
//! across services: one JSON record per call, a fixed log-type taxonomy,
//! typed payloads for HTTP/Kafka handlers, audit trails and domain
//! events, payload body capping, and an alert flag for operational
//! alerting.
//!
//! ## Usage
//!
//! ```no_run
//! use svclog::{Config, payload::AuditPayload, payload::AuditAction};
//!
//! // Once, in the bootstrap path:
//! svclog::init(Config {
//!     app_name: "sampleApp".to_string(),
//!     version: "v1.0.0".to_string(),
//!     ..Config::default()
//! });
//!
//! // At call sites:
//! svclog::info("Server started").write();
//!
//! svclog::audit("Order accessed", &AuditPayload {
//!     actor_type: "user".to_string(),
//!     actor_id: "USR_1".to_string(),
//!     action: AuditAction::Access,
//!     entity: "order".to_string(),
//!     entity_refs: vec!["ORD_1".to_string()],
//!     entity_owner_type: "store".to_string(),
//!     entity_owner_id: "STR_1".to_string(),
//! })
//! .with_app_data("channel", "web")
//! .write();
//! ```
//!
//! Entries are values: clone one to branch two enrichment chains and
//! neither will see the other's additions.

pub mod core;
pub mod global;
pub mod macros;
pub mod payload;
pub mod sink;

pub mod prelude {
    pub use crate::core::{
        Config, Entry, FieldValue, Level, LogError, LogType, Logger, Result, SpanContext,
        StaticSpanContext, TimeSource,
    };
    pub use crate::payload::{
        AuditAction, AuditPayload, EventAction, EventPayload, EventResult, HttpRequestPayload,
        HttpResponsePayload, KafkaMessagePayload, KafkaResultPayload,
    };
    pub use crate::sink::{CaptureSink, CapturedRecord, ConsoleSink, JsonSink, Sink};
}

pub use crate::core::{
    capture_stack_trace, Config, Entry, FieldValue, Level, LogError, LogType, Logger, Result,
    SpanContext, StaticSpanContext, TimeSource,
};
pub use crate::global::{
    audit, debug, error, event, fatal, global, http, info, init, kafka, log, panic, warn,
};
pub use crate::sink::{CaptureSink, CapturedRecord, ConsoleSink, JsonSink, Sink};
