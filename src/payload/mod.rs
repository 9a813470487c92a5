//! Typed payload records attached to log entries
//!
//! All payloads are plain value types serialized under fixed keys in the
//! record's `data` map (`http_request`, `http_response`, `kafka_message`,
//! `kafka_result`, `event`, `audit`).

pub mod audit;
pub mod event;
pub mod http;
pub mod kafka;

pub use audit::{AuditAction, AuditPayload};
pub use event::{EventAction, EventPayload, EventResult};
pub use http::{HttpRequestPayload, HttpResponsePayload};
pub use kafka::{KafkaMessagePayload, KafkaResultPayload};
