//! Builder pattern for PortalClient construction

use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use crate::client::PortalClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::hooks::{
    ActivityHook, Navigator, NoopActivity, NoopNavigator, NoopNotifier, Notifier,
};
use crate::storage::{KeyValueStore, MemoryStore};

/// Builder for [`PortalClient`]
///
/// Configuration and collaborators are optional: hooks default to
/// no-ops and the store to an in-memory map, so library consumers
/// only wire what their host provides.
///
/// # Example
///
/// ```no_run
/// use pearl_client::{ClientConfig, PortalClient};
///
/// let client = PortalClient::builder()
///     .config(ClientConfig::new("https://portal.example.com"))
///     .build()
///     .expect("Failed to build client");
/// ```
#[derive(Default)]
pub struct PortalClientBuilder {
    config: ClientConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
    activity: Option<Arc<dyn ActivityHook>>,
}

impl PortalClientBuilder {
    /// Creates a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the backend base URL, keeping the rest of the configuration
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Sets the persistent key/value store
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the notification collaborator
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Sets the navigation collaborator
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Sets the activity hook driving the host's inactivity timer
    pub fn activity(mut self, activity: Arc<dyn ActivityHook>) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Builds the portal client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the underlying HTTP clients
    /// cannot be constructed.
    pub fn build(self) -> ClientResult<PortalClient> {
        let config = self.config;

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        // Exports go to a separate host and stream binary bodies, so
        // they get their own client without the JSON default headers.
        let export_http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build export client: {}", e)))?;

        Ok(PortalClient {
            http,
            export_http,
            config,
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(NoopNotifier)),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
            activity: self.activity.unwrap_or_else(|| Arc::new(NoopActivity)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let client = PortalClientBuilder::new().build().unwrap();
        assert_eq!(client.config().base_url, "http://localhost:8080");
    }

    #[test]
    fn test_base_url_shorthand() {
        let client = PortalClient::builder()
            .base_url("https://portal.example.com")
            .build()
            .unwrap();
        assert_eq!(client.config().base_url, "https://portal.example.com");
    }
}
