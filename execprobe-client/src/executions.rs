//! Execution endpoints

use crate::FunctionsClient;
use crate::error::{ClientError, Result};
use execprobe_core::domain::execution::Execution;
use execprobe_core::dto::execution::CreateExecution;
use reqwest::Method;

impl FunctionsClient {
    // =============================================================================
    // Execution Lifecycle
    // =============================================================================

    /// Trigger an execution of a function
    ///
    /// For asynchronous requests the returned record only carries an id and an
    /// initial (pending) status.
    ///
    /// # Arguments
    /// * `function_id` - The function to invoke
    /// * `req` - Body, path and mode of the invocation
    pub async fn create_execution(
        &self,
        function_id: &str,
        req: &CreateExecution,
    ) -> Result<Execution> {
        require_id("function id", function_id)?;

        let url = self.executions_url(function_id);
        tracing::debug!("POST {} (async: {}, path: {})", url, req.is_async, req.path);

        let response = self.request(Method::POST, &url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Get the current snapshot of an execution
    ///
    /// # Arguments
    /// * `function_id` - The function the execution belongs to
    /// * `execution_id` - The execution id returned by [`Self::create_execution`]
    pub async fn get_execution(&self, function_id: &str, execution_id: &str) -> Result<Execution> {
        require_id("function id", function_id)?;
        require_id("execution id", execution_id)?;

        let url = format!("{}/{}", self.executions_url(function_id), execution_id);
        tracing::debug!("GET {}", url);

        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    fn executions_url(&self, function_id: &str) -> String {
        format!("{}/functions/{}/executions", self.endpoint, function_id)
    }
}

fn require_id(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidRequest(format!("{} cannot be empty", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executions_url() {
        let client = FunctionsClient::new("https://cloud.appwrite.io/v1/", "project", "key");
        assert_eq!(
            client.executions_url("shortlist-fn"),
            "https://cloud.appwrite.io/v1/functions/shortlist-fn/executions"
        );
    }

    #[tokio::test]
    async fn test_empty_ids_rejected_before_any_request() {
        // Unroutable endpoint: reaching the network would fail differently
        let client = FunctionsClient::new("http://127.0.0.1:9/v1", "project", "key");

        let err = client.get_execution("shortlist-fn", " ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));

        let err = client
            .create_execution("", &CreateExecution::asynchronous("{}", "/test"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
