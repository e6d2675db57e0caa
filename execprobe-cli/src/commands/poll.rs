//! Poll command handler
//!
//! Runs the end-to-end polling test against the configured function.

use anyhow::{Context, Result};
use clap::{Args, FromArgMatches};
use colored::*;
use execprobe_client::FunctionsClient;
use execprobe_core::dto::execution::CreateExecution;
use execprobe_core::dto::function::TEST_PATH;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::poller::{ExecutionPoller, PollSettings};
use crate::report::ConsoleReporter;

/// Arguments of the poll command
#[derive(Args, Debug, Clone)]
pub struct PollArgs {
    /// Path requested from the function
    #[arg(long, env = "EXECPROBE_PATH", default_value = TEST_PATH)]
    pub path: String,

    /// Body sent with the invocation
    #[arg(long, env = "EXECPROBE_BODY", default_value = r#"{"test":true}"#)]
    pub body: String,

    /// Delay before the first status read, in milliseconds
    #[arg(long, env = "EXECPROBE_INITIAL_DELAY_MS", default_value_t = 1000)]
    pub initial_delay_ms: u64,

    /// Delay between status reads, in milliseconds
    #[arg(long, env = "EXECPROBE_INTERVAL_MS", default_value_t = 2000)]
    pub interval_ms: u64,

    /// Give up once polling has run longer than this, in seconds
    #[arg(long, env = "EXECPROBE_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

impl PollArgs {
    /// Arguments of a bare `poll`: built-in defaults, overridden by the environment
    pub fn from_env() -> Result<Self> {
        let matches = Self::augment_args(clap::Command::new("poll")).try_get_matches_from(["poll"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }

    /// Converts the cadence flags into poller settings
    pub fn settings(&self) -> Result<PollSettings> {
        if self.interval_ms == 0 {
            anyhow::bail!("--interval-ms must be greater than 0");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("--timeout-secs must be greater than 0");
        }

        Ok(PollSettings {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            poll_interval: Duration::from_millis(self.interval_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

/// Run the polling test
pub async fn handle_poll_command(
    args: PollArgs,
    client: FunctionsClient,
    config: &Config,
) -> Result<()> {
    let settings = args.settings()?;

    println!();
    println!("{}", "=== Starting Polling Test ===".bold());
    println!("Function ID: {}", config.function_id);
    println!("Path: {}", args.path);
    println!("Body: {}", args.body);
    println!();
    println!("{}", "1. Creating async execution...".bold());

    let poller = ExecutionPoller::new(Arc::new(client), settings);
    let request = CreateExecution::asynchronous(args.body, args.path);

    let outcome = poller
        .run(&config.function_id, &request, &mut ConsoleReporter::default())
        .await
        .context("Polling test failed")?;

    if outcome.is_success() {
        info!("Status endpoint exposed the response body");
    } else {
        info!("No response body observed through the status endpoint");
    }

    println!();
    println!("{}", "=== Test Complete ===".bold());
    println!();

    Ok(())
}
