/**
 * Client Configuration
 *
 * Server base URL, from the environment or a localhost default.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url = std::env::var("COLLAB_NOTES_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl ClientConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at a specific server.
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        let mut server_url = server_url.into();
        while server_url.ends_with('/') {
            server_url.pop();
        }
        Self { server_url }
    }

    /// Get the full URL for an API endpoint.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
