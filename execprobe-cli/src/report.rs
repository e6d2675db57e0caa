//! Console output for poll runs
//!
//! Mirrors the transcript of a manual polling test: one block per status
//! read, then a verdict on whether the response body was exposed.

use colored::*;
use execprobe_core::domain::execution::{Execution, ExecutionStatus};
use tokio::time::Duration;

use crate::poller::{PollAttempt, PollOutcome, PollReporter, ResponseBody};

/// Prints progress and the final diagnosis to stdout
#[derive(Default)]
pub struct ConsoleReporter {
    polling_started: bool,
}

impl PollReporter for ConsoleReporter {
    fn invoked(&mut self, execution: &Execution) {
        println!("   Execution ID: {}", execution.id.bold());
        println!("   Initial status: {}", colorize_status(execution.status));
    }

    fn waiting(&mut self, delay: Duration, first: bool) {
        if first {
            println!();
            println!(
                "{}",
                format!("2. Waiting {} before first poll...", format_delay(delay)).bold()
            );
        } else {
            println!(
                "{}",
                format!("   Waiting {} before next poll...", format_delay(delay)).dimmed()
            );
        }
    }

    fn attempt(&mut self, attempt: &PollAttempt) {
        if !self.polling_started {
            self.polling_started = true;
            println!();
            println!("{}", "3. Starting poll loop...".bold());
        }

        println!();
        println!(
            "   {} (after {:.1}s)",
            format!("--- Poll #{} ---", attempt.sequence).cyan(),
            attempt.elapsed.as_secs_f64()
        );
        print_snapshot(&attempt.execution);
    }

    fn finished(&mut self, outcome: &PollOutcome) {
        print_outcome(outcome);
    }
}

/// Print the fields of a snapshot that matter for the diagnosis
pub fn print_snapshot(execution: &Execution) {
    println!("   Status: {}", colorize_status(execution.status));
    println!("   Response Status Code: {}", execution.response_status_code);
    println!("   Response Body: \"{}\"", execution.response_body);
    println!("   Response Body Length: {}", execution.response_body.len());
    if execution.response_headers.is_empty() {
        println!("   Response Headers: {}", "(none)".dimmed());
    } else {
        println!("   Response Headers:");
        for header in &execution.response_headers {
            println!("     {}: {}", header.name.dimmed(), header.value);
        }
    }
}

/// Print the verdict of a finished run
pub fn print_outcome(outcome: &PollOutcome) {
    println!();
    match outcome {
        PollOutcome::Completed { execution, body } => {
            println!("{}", "=== EXECUTION COMPLETED ===".bold());
            print_full_record(execution);
            print_body_diagnosis(body);
        }
        PollOutcome::Failed { execution } => {
            println!("{}", "✗ EXECUTION FAILED".red().bold());
            if execution.errors.is_empty() {
                println!("Errors: {}", "(none reported)".dimmed());
            } else {
                println!("Errors: {}", execution.errors.red());
            }
        }
        PollOutcome::TimedOut { attempts, elapsed } => {
            println!(
                "{}",
                format!(
                    "⏱ TIMEOUT: Polling exceeded {:.0} seconds ({} poll(s))",
                    elapsed.as_secs_f64().floor(),
                    attempts
                )
                .yellow()
                .bold()
            );
        }
    }
}

/// Print whether the body of a completed execution was exposed
pub fn print_body_diagnosis(body: &ResponseBody) {
    println!();

    let verdict = body_verdict(body);
    let mut lines = verdict.lines();
    if let Some(headline) = lines.next() {
        if body.is_exposed() {
            println!("{}", format!("✓ {}", headline).green().bold());
        } else {
            println!("{}", format!("✗ {}", headline).red().bold());
        }
    }
    for line in lines {
        println!("{}", line);
    }

    match body {
        ResponseBody::Json(value) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            println!("Parsed response: {}", pretty);
        }
        ResponseBody::Text(raw) => {
            println!("{} {}", "Body is not JSON, raw value:".yellow(), raw);
        }
        ResponseBody::Missing { .. } => {}
    }
}

/// Plain-text verdict on the body of a completed execution
///
/// The first line is the headline.
pub fn body_verdict(body: &ResponseBody) -> String {
    let ResponseBody::Missing { content_length } = body else {
        return "SUCCESS: responseBody is available!".to_string();
    };

    let mut verdict =
        String::from("FAILURE: responseBody is empty!\nThis confirms the platform limitation.");
    if body.withheld_by_platform() {
        verdict.push_str(&format!(
            "\n\nNote: content-length header shows {} bytes\n\
             The backend DID return data, but the execution status endpoint does not expose it.",
            content_length.as_deref().unwrap_or_default()
        ));
    }
    verdict
}

fn print_full_record(execution: &Execution) {
    println!("Full result object:");
    match serde_json::to_string_pretty(execution) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", format!("<unprintable: {}>", e).dimmed()),
    }
}

/// Colorize execution status for display
pub fn colorize_status(status: ExecutionStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        ExecutionStatus::Completed => status_str.green(),
        ExecutionStatus::Failed => status_str.red(),
        ExecutionStatus::Waiting | ExecutionStatus::Scheduled => status_str.yellow(),
        ExecutionStatus::Processing => status_str.cyan(),
        ExecutionStatus::Unknown => status_str.dimmed(),
    }
}

fn format_delay(delay: Duration) -> String {
    let millis = delay.as_millis();
    if millis % 1000 != 0 {
        return format!("{} ms", millis);
    }
    match millis / 1000 {
        1 => "1 second".to_string(),
        secs => format!("{} seconds", secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_when_platform_withholds_body() {
        let verdict = body_verdict(&ResponseBody::Missing {
            content_length: Some("121".to_string()),
        });

        assert!(verdict.starts_with("FAILURE: responseBody is empty!"));
        assert!(verdict.contains("content-length header shows 121 bytes"));
        assert!(verdict.contains("The backend DID return data"));
    }

    #[test]
    fn test_verdict_for_empty_body_without_header() {
        let verdict = body_verdict(&ResponseBody::Missing {
            content_length: None,
        });

        assert!(verdict.starts_with("FAILURE"));
        assert!(!verdict.contains("DID return data"));
    }

    #[test]
    fn test_verdict_for_exposed_body() {
        let verdict = body_verdict(&ResponseBody::Json(serde_json::json!({ "ok": true })));
        assert_eq!(verdict, "SUCCESS: responseBody is available!");

        let verdict = body_verdict(&ResponseBody::Text("plain".to_string()));
        assert_eq!(verdict, "SUCCESS: responseBody is available!");
    }

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(Duration::from_secs(1)), "1 second");
        assert_eq!(format_delay(Duration::from_secs(2)), "2 seconds");
        assert_eq!(format_delay(Duration::from_millis(1500)), "1500 ms");
    }
}
