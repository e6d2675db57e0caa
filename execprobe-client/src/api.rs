//! Execution API abstraction
//!
//! The poller only needs two calls. Hiding them behind a trait lets it run
//! against scripted snapshots in tests.

use async_trait::async_trait;
use execprobe_core::domain::execution::Execution;
use execprobe_core::dto::execution::CreateExecution;

use crate::FunctionsClient;
use crate::error::Result;

/// Invocation and status-read calls against a Functions platform
#[async_trait]
pub trait ExecutionApi: Send + Sync {
    /// Trigger an execution and return its initial record
    async fn create_execution(&self, function_id: &str, req: &CreateExecution)
    -> Result<Execution>;

    /// Read the current snapshot of an execution
    async fn get_execution(&self, function_id: &str, execution_id: &str) -> Result<Execution>;
}

#[async_trait]
impl ExecutionApi for FunctionsClient {
    async fn create_execution(
        &self,
        function_id: &str,
        req: &CreateExecution,
    ) -> Result<Execution> {
        FunctionsClient::create_execution(self, function_id, req).await
    }

    async fn get_execution(&self, function_id: &str, execution_id: &str) -> Result<Execution> {
        FunctionsClient::get_execution(self, function_id, execution_id).await
    }
}
