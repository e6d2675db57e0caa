//! Function stub
//!
//! Minimal function used to exercise execution polling. `/test` answers after
//! a short delay, every other path answers immediately with a status payload.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;

use api::FunctionState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "execprobe_function=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting function stub...");

    let test_delay = match std::env::var("FUNCTION_TEST_DELAY_MS") {
        Ok(raw) => Duration::from_millis(
            raw.parse()
                .with_context(|| format!("FUNCTION_TEST_DELAY_MS is not a number: {}", raw))?,
        ),
        Err(_) => api::DEFAULT_TEST_DELAY,
    };

    let app = api::create_router(FunctionState { test_delay });

    let addr = std::env::var("FUNCTION_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Listening on {} (test delay: {:?})", addr, test_delay);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
