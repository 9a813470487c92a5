//! Kafka handler payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload describing a consumed or produced Kafka message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaMessagePayload {
    /// Topic the message belongs to.
    pub topic: String,

    /// Partition number within the topic.
    pub partition: i32,

    /// Offset within the partition.
    pub offset: i64,

    /// Message header key-value pairs.
    pub headers: HashMap<String, String>,

    /// Optional message key.
    pub key: String,

    /// Raw message bytes; base64 on the wire.
    #[serde(with = "base64_bytes")]
    pub payload: Vec<u8>,

    /// Broker timestamp of the message.
    pub timestamp: DateTime<Utc>,
}

impl Default for KafkaMessagePayload {
    fn default() -> Self {
        Self {
            topic: String::new(),
            partition: 0,
            offset: 0,
            headers: HashMap::new(),
            key: String::new(),
            payload: Vec::new(),
            timestamp: DateTime::<Utc>::MIN_UTC,
        }
    }
}

/// Payload describing the outcome of handling a Kafka message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaResultPayload {
    /// Handling duration in milliseconds.
    pub duration: f64,

    /// True when the offset was committed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub committed: bool,

    /// Failure message when handling did not commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

mod base64_bytes {
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}
