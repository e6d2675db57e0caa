//! Execution domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution record
///
/// Snapshot of a single function invocation as returned by the Functions API.
/// Field names follow the platform's JSON (`$id`, camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub function_id: String,
    #[serde(default)]
    pub trigger: String,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub request_method: String,
    #[serde(default)]
    pub request_path: String,
    #[serde(default)]
    pub response_status_code: u16,
    /// Empty when the platform did not expose a body
    #[serde(default)]
    pub response_body: String,
    #[serde(default)]
    pub response_headers: Vec<ResponseHeader>,
    #[serde(default)]
    pub logs: String,
    #[serde(default)]
    pub errors: String,
    /// Execution time in seconds
    #[serde(default)]
    pub duration: f64,
}

impl Execution {
    /// Looks up a response header by name, ignoring ASCII case.
    ///
    /// Returns the first match in the order the platform reported them.
    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Whether the execution reached completed or failed
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// A single name/value response header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    pub name: String,
    pub value: String,
}

/// Execution status
///
/// `Waiting`, `Processing` and `Scheduled` are pending states.
/// Anything the platform adds later decodes as `Unknown` and is treated as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Waiting,
    Processing,
    Scheduled,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl ExecutionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Processing => "processing",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_platform_execution() {
        let raw = r#"{
            "$id": "6710bd6d0025a1b43f1e",
            "$createdAt": "2024-10-17T07:31:25.153+00:00",
            "$updatedAt": "2024-10-17T07:31:27.402+00:00",
            "$permissions": [],
            "functionId": "shortlist-fn",
            "trigger": "http",
            "status": "completed",
            "requestMethod": "POST",
            "requestPath": "/test",
            "requestHeaders": [],
            "responseStatusCode": 200,
            "responseBody": "",
            "responseHeaders": [
                {"name": "content-type", "value": "application/json"},
                {"name": "content-length", "value": "121"}
            ],
            "logs": "",
            "errors": "",
            "duration": 2.014
        }"#;

        let execution: Execution = serde_json::from_str(raw).unwrap();
        assert_eq!(execution.id, "6710bd6d0025a1b43f1e");
        assert_eq!(execution.status, ExecutionStatus::Completed);
        assert_eq!(execution.response_status_code, 200);
        assert!(execution.response_body.is_empty());
        assert_eq!(execution.response_headers.len(), 2);
        assert!(execution.created_at.is_some());
        assert!(execution.is_terminal());
    }

    #[test]
    fn test_decode_minimal_execution() {
        let execution: Execution =
            serde_json::from_str(r#"{"$id": "abc", "status": "waiting"}"#).unwrap();
        assert_eq!(execution.status, ExecutionStatus::Waiting);
        assert!(execution.response_headers.is_empty());
        assert!(!execution.is_terminal());
    }

    #[test]
    fn test_unknown_status_is_pending() {
        let execution: Execution =
            serde_json::from_str(r#"{"$id": "abc", "status": "cancelling"}"#).unwrap();
        assert_eq!(execution.status, ExecutionStatus::Unknown);
        assert!(!execution.is_terminal());
    }

    #[test]
    fn test_response_header_lookup_ignores_case() {
        let execution = Execution {
            id: "abc".to_string(),
            created_at: None,
            updated_at: None,
            function_id: String::new(),
            trigger: String::new(),
            status: ExecutionStatus::Completed,
            request_method: String::new(),
            request_path: String::new(),
            response_status_code: 200,
            response_body: String::new(),
            response_headers: vec![
                ResponseHeader {
                    name: "Content-Length".to_string(),
                    value: "42".to_string(),
                },
                ResponseHeader {
                    name: "content-length".to_string(),
                    value: "7".to_string(),
                },
            ],
            logs: String::new(),
            errors: String::new(),
            duration: 0.0,
        };

        assert_eq!(execution.response_header("content-length"), Some("42"));
        assert_eq!(execution.response_header("x-missing"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ExecutionStatus::Processing.to_string(), "processing");
        assert!(ExecutionStatus::Failed.is_terminal());
        assert!(!ExecutionStatus::Scheduled.is_terminal());
    }
}
