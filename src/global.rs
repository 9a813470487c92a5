//! Process-wide logger handle
//!
//! One logger per process: the first successful [`init`] wins, every
//! later or concurrent call observes the already-initialized handle and
//! constructs nothing. There is no teardown.

use crate::core::config::Config;
use crate::core::entry::Entry;
use crate::core::level::Level;
use crate::core::logger::Logger;
use crate::payload::{
    AuditPayload, EventPayload, HttpRequestPayload, HttpResponsePayload, KafkaMessagePayload,
    KafkaResultPayload,
};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Initialize the process-wide logger. Do this once in the bootstrap
/// path; redundant calls are no-ops and return the existing handle.
pub fn init(config: Config) -> &'static Logger {
    GLOBAL.get_or_init(move || Logger::new(config))
}

/// The process-wide logger, initialized with defaults when [`init`] was
/// never called.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(Config::default()))
}

/// Application entry at an arbitrary level on the process-wide logger.
#[must_use]
pub fn log(level: Level, message: impl Into<String>) -> Entry {
    global().log(level, message)
}

#[must_use]
pub fn debug(message: impl Into<String>) -> Entry {
    global().debug(message)
}

#[must_use]
pub fn info(message: impl Into<String>) -> Entry {
    global().info(message)
}

#[must_use]
pub fn warn(message: impl Into<String>) -> Entry {
    global().warn(message)
}

#[must_use]
pub fn error(message: impl Into<String>) -> Entry {
    global().error(message)
}

#[must_use]
pub fn panic(message: impl Into<String>) -> Entry {
    global().panic(message)
}

#[must_use]
pub fn fatal(message: impl Into<String>) -> Entry {
    global().fatal(message)
}

#[must_use]
pub fn audit(message: impl Into<String>, payload: &AuditPayload) -> Entry {
    global().audit(message, payload)
}

#[must_use]
pub fn event(message: impl Into<String>, payload: &EventPayload) -> Entry {
    global().event(message, payload)
}

#[must_use]
pub fn http(
    message: impl Into<String>,
    request: Option<&HttpRequestPayload>,
    response: Option<&HttpResponsePayload>,
) -> Entry {
    global().http(message, request, response)
}

#[must_use]
pub fn kafka(
    message: impl Into<String>,
    kafka_message: Option<&KafkaMessagePayload>,
    kafka_result: Option<&KafkaResultPayload>,
) -> Entry {
    global().kafka(message, kafka_message, kafka_result)
}
