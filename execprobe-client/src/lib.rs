//! Execprobe HTTP Client
//!
//! A small, type-safe client for the executions endpoints of an
//! Appwrite-compatible Functions API.
//!
//! # Example
//!
//! ```no_run
//! use execprobe_client::FunctionsClient;
//! use execprobe_core::dto::execution::CreateExecution;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FunctionsClient::new("https://cloud.appwrite.io/v1", "my-project", "secret");
//!
//!     let execution = client
//!         .create_execution("my-function", &CreateExecution::asynchronous("{}", "/test"))
//!         .await?;
//!
//!     println!("Created execution: {}", execution.id);
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod executions;

// Re-export commonly used types
pub use api::ExecutionApi;
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Header carrying the project id
const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Header carrying the server API key
const KEY_HEADER: &str = "X-Appwrite-Key";

/// HTTP client for the Functions API
///
/// Every request is scoped to one project and authenticated with an API key.
#[derive(Debug, Clone)]
pub struct FunctionsClient {
    /// API endpoint including the version segment (e.g., "https://cloud.appwrite.io/v1")
    endpoint: String,
    project_id: String,
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl FunctionsClient {
    /// Create a new Functions client
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint (e.g., "https://cloud.appwrite.io/v1")
    /// * `project_id` - Project the functions belong to
    /// * `api_key` - Server API key with the `executions.read` and `executions.write` scopes
    ///
    /// # Example
    /// ```
    /// use execprobe_client::FunctionsClient;
    ///
    /// let client = FunctionsClient::new("https://cloud.appwrite.io/v1", "my-project", "secret");
    /// ```
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::with_client(endpoint, project_id, api_key, Client::new())
    }

    /// Create a new Functions client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the API endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the project id
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Start a request carrying the project and key headers
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(PROJECT_HEADER, &self.project_id)
            .header(KEY_HEADER, &self.api_key)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses are turned into [`ClientError`]s, using the message from
    /// the platform's error document when there is one.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message(&error_text);

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ClientError::NotFound(message));
            }
            return Err(ClientError::rejected(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("invalid execution JSON: {}", e)))
    }
}

/// Error document returned by the platform on non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract a readable message from an error response body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FunctionsClient::new("https://cloud.appwrite.io/v1", "project", "key");
        assert_eq!(client.endpoint(), "https://cloud.appwrite.io/v1");
        assert_eq!(client.project_id(), "project");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = FunctionsClient::new("http://localhost/v1/", "project", "key");
        assert_eq!(client.endpoint(), "http://localhost/v1");
    }

    #[test]
    fn test_request_carries_auth_headers() {
        let client = FunctionsClient::new("http://localhost/v1", "project", "key");
        let request = client
            .request(Method::GET, "http://localhost/v1/functions/f/executions/e")
            .build()
            .unwrap();

        assert_eq!(request.headers()[PROJECT_HEADER], "project");
        assert_eq!(request.headers()[KEY_HEADER], "key");
    }

    #[test]
    fn test_error_message_from_platform_json() {
        let body = r#"{"message":"Function with the requested ID could not be found.","code":404,"type":"function_not_found","version":"1.6.0"}"#;
        assert_eq!(
            error_message(body),
            "Function with the requested ID could not be found."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("  "), "Unknown error");
    }
}
