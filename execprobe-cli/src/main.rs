//! Execprobe CLI
//!
//! Diagnostic client that triggers an asynchronous function execution and
//! polls its status to find out whether the platform exposes the response body.

mod commands;
mod config;
mod poller;
mod report;

use clap::Parser;
use colored::*;
use commands::{Commands, failure_hint, handle_command};
use config::{
    Config, DEFAULT_ENDPOINT, PLACEHOLDER_API_KEY, PLACEHOLDER_FUNCTION_ID, PLACEHOLDER_PROJECT_ID,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "execprobe")]
#[command(about = "Function execution polling test", long_about = None)]
struct Cli {
    /// Functions API endpoint
    #[arg(long, env = "APPWRITE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Project ID
    #[arg(long, env = "APPWRITE_PROJECT_ID", default_value = PLACEHOLDER_PROJECT_ID)]
    project_id: String,

    /// ID of the deployed test function
    #[arg(long, env = "APPWRITE_FUNCTION_ID", default_value = PLACEHOLDER_FUNCTION_ID)]
    function_id: String,

    /// Server API key
    #[arg(
        long,
        env = "APPWRITE_API_KEY",
        default_value = PLACEHOLDER_API_KEY,
        hide_env_values = true
    )]
    api_key: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "execprobe=info,execprobe_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        endpoint: cli.endpoint,
        project_id: cli.project_id,
        function_id: cli.function_id,
        api_key: cli.api_key,
    };

    println!("{}", "Function Execution Polling Test".bold());
    println!("{}", "===============================".bold());

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "ERROR:".red().bold(), e);
        eprintln!("       Set your endpoint, project ID, function ID, and API key.");
        return ExitCode::FAILURE;
    }

    match handle_command(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Test failed with error:".red().bold(), e);
            if let Some(hint) = failure_hint(&e) {
                eprintln!("       {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
