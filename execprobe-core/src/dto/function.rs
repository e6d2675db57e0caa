//! Payloads returned by the function stub

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Path that triggers the delayed response
pub const TEST_PATH: &str = "/test";

/// Fixed shortlist id returned on the test path
pub const TEST_SHORTLIST_ID: &str = "test-shortlist-123";

/// Delayed response served on [`TEST_PATH`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPayload {
    pub ok: bool,
    pub shortlist_id: String,
    pub message: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl TestPayload {
    /// Payload stamped with the current time
    pub fn now() -> Self {
        Self {
            ok: true,
            shortlist_id: TEST_SHORTLIST_ID.to_string(),
            message: "This is test data from the minimal server".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Static response served on every other path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPayload {
    pub ok: bool,
    pub message: String,
    pub available_paths: Vec<String>,
}

impl Default for IndexPayload {
    fn default() -> Self {
        Self {
            ok: true,
            message: "Minimal test server is running".to_string(),
            available_paths: vec![TEST_PATH.to_string()],
        }
    }
}
