// src/config.rs
//! Client configuration - environment based, with local defaults

const DEFAULT_API_URL: &str = "http://localhost:5001/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from the environment.
    pub fn load() -> Self {
        let api_base_url =
            std::env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Apply a command-line override, if one was given.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }
}
