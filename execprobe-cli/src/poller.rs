//! Execution poller
//!
//! Triggers one asynchronous execution and polls its status until it reaches
//! a terminal state or the timeout elapses. Requests are strictly sequential.

use execprobe_client::{ExecutionApi, Result};
use execprobe_core::domain::execution::{Execution, ExecutionStatus};
use execprobe_core::dto::execution::CreateExecution;
use std::sync::Arc;
use tokio::time::{self, Duration, Instant};
use tracing::{debug, info, warn};

/// Polling cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Pause between the invocation and the first status read
    pub initial_delay: Duration,
    /// Pause between two status reads
    pub poll_interval: Duration,
    /// Wall-clock budget for the poll loop
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            poll_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(60),
        }
    }
}

/// One status read
#[derive(Debug, Clone)]
pub struct PollAttempt {
    /// 1-based
    pub sequence: u32,
    /// Time since the poll loop started
    pub elapsed: Duration,
    pub execution: Execution,
}

/// What the response body of a completed execution looked like
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    /// Present but not JSON
    Text(String),
    /// Not exposed. `content_length` is the platform's `content-length` header, if any.
    Missing { content_length: Option<String> },
}

impl ResponseBody {
    pub fn classify(execution: &Execution) -> Self {
        if execution.response_body.is_empty() {
            return Self::Missing {
                content_length: execution
                    .response_header("content-length")
                    .map(str::to_string),
            };
        }

        match serde_json::from_str(&execution.response_body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(execution.response_body.clone()),
        }
    }

    /// A body, JSON or not, came back with the record
    pub fn is_exposed(&self) -> bool {
        !matches!(self, Self::Missing { .. })
    }

    /// The function produced a body but the status endpoint did not return it
    pub fn withheld_by_platform(&self) -> bool {
        matches!(
            self,
            Self::Missing {
                content_length: Some(_)
            }
        )
    }
}

/// Terminal result of a poll run
#[derive(Debug, Clone)]
pub enum PollOutcome {
    Completed {
        execution: Execution,
        body: ResponseBody,
    },
    Failed {
        execution: Execution,
    },
    TimedOut {
        attempts: u32,
        elapsed: Duration,
    },
}

impl PollOutcome {
    /// Completed with a body available
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { body, .. } if body.is_exposed())
    }
}

/// Observer for the progress of a poll run
///
/// Every method defaults to doing nothing.
pub trait PollReporter {
    /// The invocation was accepted
    fn invoked(&mut self, _execution: &Execution) {}

    /// About to sleep before the next status read
    fn waiting(&mut self, _delay: Duration, _first: bool) {}

    /// A status read came back
    fn attempt(&mut self, _attempt: &PollAttempt) {}

    /// The run reached an outcome
    fn finished(&mut self, _outcome: &PollOutcome) {}
}

/// Sequential invoke-then-poll loop
pub struct ExecutionPoller<A: ExecutionApi + ?Sized> {
    api: Arc<A>,
    settings: PollSettings,
}

impl<A: ExecutionApi + ?Sized> ExecutionPoller<A> {
    pub fn new(api: Arc<A>, settings: PollSettings) -> Self {
        Self { api, settings }
    }

    /// Invokes `function_id` asynchronously and polls until completed, failed or timed out
    ///
    /// Transport and API errors abort the run; nothing is retried.
    pub async fn run<R: PollReporter + ?Sized>(
        &self,
        function_id: &str,
        request: &CreateExecution,
        reporter: &mut R,
    ) -> Result<PollOutcome> {
        info!(
            "Creating execution of {} (path: {}, async: {})",
            function_id, request.path, request.is_async
        );

        let execution = self.api.create_execution(function_id, request).await?;
        info!(
            "Execution {} created with status {}",
            execution.id, execution.status
        );
        reporter.invoked(&execution);

        reporter.waiting(self.settings.initial_delay, true);
        time::sleep(self.settings.initial_delay).await;

        let outcome = self.poll(function_id, &execution.id, reporter).await?;
        reporter.finished(&outcome);

        Ok(outcome)
    }

    async fn poll<R: PollReporter + ?Sized>(
        &self,
        function_id: &str,
        execution_id: &str,
        reporter: &mut R,
    ) -> Result<PollOutcome> {
        let started = Instant::now();
        let mut sequence = 0;

        loop {
            sequence += 1;

            let execution = self.api.get_execution(function_id, execution_id).await?;
            let attempt = PollAttempt {
                sequence,
                elapsed: started.elapsed(),
                execution,
            };
            debug!(
                "Poll #{} after {:?}: status {}",
                attempt.sequence, attempt.elapsed, attempt.execution.status
            );
            reporter.attempt(&attempt);

            match attempt.execution.status {
                ExecutionStatus::Completed => {
                    let body = ResponseBody::classify(&attempt.execution);
                    info!(
                        "Execution {} completed after {} poll(s)",
                        execution_id, sequence
                    );
                    return Ok(PollOutcome::Completed {
                        execution: attempt.execution,
                        body,
                    });
                }
                ExecutionStatus::Failed => {
                    warn!("Execution {} failed: {}", execution_id, attempt.execution.errors);
                    return Ok(PollOutcome::Failed {
                        execution: attempt.execution,
                    });
                }
                _ => {}
            }

            let elapsed = started.elapsed();
            if elapsed > self.settings.timeout {
                warn!(
                    "Execution {} still {} after {:?}, giving up",
                    execution_id, attempt.execution.status, elapsed
                );
                return Ok(PollOutcome::TimedOut {
                    attempts: sequence,
                    elapsed,
                });
            }

            reporter.waiting(self.settings.poll_interval, false);
            time::sleep(self.settings.poll_interval).await;
        }
    }
}
