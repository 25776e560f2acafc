use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    /// Seconds since the process started serving.
    pub uptime: f64,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

impl Health {
    pub fn new(uptime: f64) -> Self {
        Self {
            status: "OK".into(),
            uptime,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Single-field `{"message": ...}` body used for errors and notices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
