//! Function entry point
//!
//! Turns any HTTP request into a [`FunctionRequest`] and answers with JSON.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, Uri},
};
use execprobe_core::dto::function::{IndexPayload, TEST_PATH, TestPayload};
use serde::Serialize;
use std::time::Duration;

use crate::api::FunctionState;

/// What the function sees of an invocation
#[derive(Debug, Clone)]
pub struct FunctionRequest {
    pub method: String,
    /// Always starts with `/`
    pub path: String,
    /// Lossily decoded; the function never rejects a payload
    pub body: String,
}

/// JSON document returned by the function
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FunctionResponse {
    Test(TestPayload),
    Index(IndexPayload),
}

/// Any method, any path
pub async fn invoke(
    State(state): State<FunctionState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Json<FunctionResponse> {
    let request = FunctionRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    Json(handle(request, state.test_delay).await)
}

/// Answer one invocation
///
/// `/test` sleeps for `delay` before answering.
pub async fn handle(request: FunctionRequest, delay: Duration) -> FunctionResponse {
    let path = if request.path.is_empty() {
        "/"
    } else {
        request.path.as_str()
    };

    tracing::info!("Received {} request to path: {}", request.method, path);
    if !request.body.is_empty() {
        tracing::debug!("Request body: {}", request.body);
    }

    if path == TEST_PATH {
        tokio::time::sleep(delay).await;

        let payload = TestPayload::now();
        tracing::info!(
            "Returning response: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        return FunctionResponse::Test(payload);
    }

    FunctionResponse::Index(IndexPayload::default())
}
