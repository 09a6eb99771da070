//! Client configuration

/// Client configuration for connecting to the portal backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Base URL for the spreadsheet-export host
    ///
    /// Exports go to a dedicated host that streams binary responses;
    /// it is addressed separately from the shared API client.
    pub export_base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Diagnostic mode: on transport failures, log the error and
    /// request navigation to the error-display route in addition to
    /// returning the normalized result. Off in normal operation.
    pub diagnostic_redirect: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            export_base_url: "http://localhost:8080/".to_string(),
            timeout: 30,
            diagnostic_redirect: false,
        }
    }

    /// Set the export host base URL
    pub fn with_export_base_url(mut self, url: impl Into<String>) -> Self {
        self.export_base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Enable or disable the diagnostic error redirect
    pub fn with_diagnostic_redirect(mut self, enabled: bool) -> Self {
        self.diagnostic_redirect = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.export_base_url, "http://localhost:8080/");
        assert_eq!(config.timeout, 30);
        assert!(!config.diagnostic_redirect);
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("https://portal.example.com")
            .with_export_base_url("https://files.example.com/")
            .with_timeout(5)
            .with_diagnostic_redirect(true);
        assert_eq!(config.base_url, "https://portal.example.com");
        assert_eq!(config.export_base_url, "https://files.example.com/");
        assert_eq!(config.timeout, 5);
        assert!(config.diagnostic_redirect);
    }
}
