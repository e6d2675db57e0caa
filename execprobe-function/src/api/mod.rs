//! API Module
//!
//! HTTP surface of the function stub. The function has a single entry point,
//! so every method and path lands on the same handler.

pub mod function;

use axum::Router;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// How long `/test` takes when not configured otherwise
pub const DEFAULT_TEST_DELAY: Duration = Duration::from_secs(2);

/// Shared handler settings
#[derive(Debug, Clone, Copy)]
pub struct FunctionState {
    /// Simulated work on the test path
    pub test_delay: Duration,
}

impl Default for FunctionState {
    fn default() -> Self {
        Self {
            test_delay: DEFAULT_TEST_DELAY,
        }
    }
}

/// Create the router serving the function
pub fn create_router(state: FunctionState) -> Router {
    Router::new()
        .fallback(function::invoke)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
