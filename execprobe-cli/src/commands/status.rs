//! Status command handler
//!
//! Reads one execution record, e.g. to re-check an execution from an earlier run.

use anyhow::{Context, Result};
use colored::*;
use execprobe_client::FunctionsClient;
use execprobe_core::domain::execution::ExecutionStatus;

use crate::poller::ResponseBody;
use crate::report::{colorize_status, print_body_diagnosis, print_snapshot};

/// Fetch and display a single execution
pub async fn show_execution(
    client: &FunctionsClient,
    function_id: &str,
    execution_id: &str,
) -> Result<()> {
    let execution = client
        .get_execution(function_id, execution_id)
        .await
        .with_context(|| format!("Failed to fetch execution {}", execution_id))?;

    println!(
        "{} {} ({})",
        "Execution".bold(),
        execution.id.bold(),
        colorize_status(execution.status)
    );
    if let Some(created_at) = execution.created_at {
        println!(
            "   Created: {}",
            created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
    println!("   Duration: {:.3}s", execution.duration);
    print_snapshot(&execution);

    match execution.status {
        ExecutionStatus::Completed => print_body_diagnosis(&ResponseBody::classify(&execution)),
        ExecutionStatus::Failed => {
            println!();
            println!("{} {}", "Errors:".red().bold(), execution.errors);
        }
        _ => {
            println!();
            println!("{}", "Execution has not finished yet.".yellow());
        }
    }

    Ok(())
}
