//! Execution DTOs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to create an execution of a function
///
/// The function id travels in the URL, not in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExecution {
    /// Opaque payload handed to the function
    pub body: String,
    /// Return immediately with an execution id instead of waiting for the result
    #[serde(rename = "async")]
    pub is_async: bool,
    pub path: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl CreateExecution {
    /// Builds an asynchronous POST invocation
    pub fn asynchronous(body: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            is_async: true,
            path: path.into(),
            method: "POST".to_string(),
            headers: HashMap::new(),
        }
    }
}
