//! HTTP handler payloads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload describing an incoming HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestPayload {
    /// HTTP method, e.g. "GET", "POST".
    pub method: String,

    /// Handler or function name, for easier searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    /// Request path; keeping it as a route template ("/api/{id}") makes
    /// records groupable.
    pub path: String,

    /// Remote IP address of the client.
    pub remote_ip: String,

    /// Request headers.
    pub headers: HashMap<String, String>,

    /// URL path parameters.
    pub params: HashMap<String, String>,

    /// URL query parameters.
    pub query: HashMap<String, String>,

    /// Raw request body.
    pub body: String,

    /// Unique identifier for the request.
    pub request_id: String,
}

/// Payload describing an HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpResponsePayload {
    /// HTTP status code.
    pub status: u16,

    /// Request processing duration in milliseconds.
    pub duration: f64,

    /// Response body.
    pub body: String,

    /// Request identifier this response belongs to.
    pub request_id: String,

    /// Response headers, when worth recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}
