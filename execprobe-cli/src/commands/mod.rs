//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod poll;
mod status;

pub use poll::PollArgs;

use anyhow::Result;
use clap::Subcommand;
use execprobe_client::{ClientError, FunctionsClient};

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger an asynchronous execution and poll it until it finishes
    Poll(PollArgs),
    /// Fetch a single execution and diagnose its response body
    Status {
        /// Execution ID returned when the execution was created
        execution_id: String,
    },
}

/// Handle a CLI command
///
/// Without a subcommand the polling test runs with its defaults.
///
/// # Arguments
/// * `command` - The command to execute, if any
/// * `config` - The validated CLI configuration
pub async fn handle_command(command: Option<Commands>, config: &Config) -> Result<()> {
    let command = match command {
        Some(command) => command,
        None => Commands::Poll(PollArgs::from_env()?),
    };
    let client = FunctionsClient::new(&config.endpoint, &config.project_id, &config.api_key);

    match command {
        Commands::Poll(args) => poll::handle_poll_command(args, client, config).await,
        Commands::Status { execution_id } => {
            status::show_execution(&client, &config.function_id, &execution_id).await
        }
    }
}

/// Suggest what to check when a run failed on a platform answer
pub fn failure_hint(err: &anyhow::Error) -> Option<&'static str> {
    let client_err = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())?;

    if client_err.is_auth_error() {
        Some("Check the API key, its executions.read/executions.write scopes, and the project ID.")
    } else if client_err.is_not_found() {
        Some("Check that the function ID (and execution ID) exist in this project.")
    } else {
        None
    }
}
