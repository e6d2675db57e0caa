//! Configuration module
//!
//! Connection settings for the Functions API. The defaults are placeholders
//! that must be replaced before anything is sent over the network.

use anyhow::Result;

pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
pub const PLACEHOLDER_PROJECT_ID: &str = "YOUR_PROJECT_ID";
pub const PLACEHOLDER_FUNCTION_ID: &str = "YOUR_FUNCTION_ID";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API endpoint including the version segment
    pub endpoint: String,
    pub project_id: String,
    /// Function under test
    pub function_id: String,
    pub api_key: String,
}

impl Config {
    /// Checks that every connection setting was filled in
    ///
    /// Reports all unresolved settings at once.
    pub fn validate(&self) -> Result<()> {
        let mut unresolved = Vec::new();

        let endpoint = self.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            unresolved.push("endpoint (must start with http:// or https://)");
        }
        if is_placeholder(&self.project_id, PLACEHOLDER_PROJECT_ID) {
            unresolved.push("project id");
        }
        if is_placeholder(&self.function_id, PLACEHOLDER_FUNCTION_ID) {
            unresolved.push("function id");
        }
        if is_placeholder(&self.api_key, PLACEHOLDER_API_KEY) {
            unresolved.push("API key");
        }

        if !unresolved.is_empty() {
            anyhow::bail!(
                "configuration placeholders not replaced: {}",
                unresolved.join(", ")
            );
        }

        Ok(())
    }
}

fn is_placeholder(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == placeholder
}
