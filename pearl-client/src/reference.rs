//! Reference-data cache readers
//!
//! Read-through cache over the portal's classification code groups
//! and configuration variables. A storage hit returns without a
//! network call; a miss fetches, stores non-empty payloads under the
//! derived key, and swallows any failure into an empty result.
//! Callers must treat "no data" as a normal outcome.

use http::Method;

use shared::{ApiResult, CodeItem};

use crate::client::PortalClient;

/// Storage key for a cached code group
fn code_key(group: &str) -> String {
    format!("code__{}", group)
}

/// Storage key for a cached variable
fn variable_key(name: &str) -> String {
    format!("variable__{}", name)
}

impl PortalClient {
    /// Fetch the items of a classification code group
    ///
    /// An empty list means "no data": the group may be empty or the
    /// fetch may have failed; failures are only visible in the logs.
    /// Skips the session-expiry interceptor.
    pub async fn code_list(&self, group: &str) -> Vec<CodeItem> {
        let key = code_key(group);
        if self.store.has(&key) {
            if let Some(value) = self.store.get(&key) {
                if let Ok(items) = serde_json::from_value::<Vec<CodeItem>>(value) {
                    return items;
                }
            }
        }

        let result: ApiResult<Vec<CodeItem>> = self
            .request(Method::GET, &format!("api/codes/{}", group), None::<&()>)
            .await;
        if !result.is_success() {
            tracing::warn!(group, code = %result.code, message = %result.message, "Code group fetch failed");
            return Vec::new();
        }

        let items = result.data.unwrap_or_default();
        if !items.is_empty() {
            match serde_json::to_value(&items) {
                Ok(value) => self.store.set(&key, value),
                Err(e) => tracing::warn!(group, error = %e, "Failed to cache code group"),
            }
        }
        items
    }

    /// Fetch a named configuration variable
    ///
    /// `None` means "no data", whether the variable is unset or the
    /// fetch failed. Skips the session-expiry interceptor.
    pub async fn variable(&self, name: &str) -> Option<String> {
        let key = variable_key(name);
        if self.store.has(&key) {
            if let Some(value) = self.store.get(&key) {
                if let Some(text) = value.as_str() {
                    return Some(text.to_string());
                }
            }
        }

        let result: ApiResult<String> = self
            .request(Method::GET, &format!("api/variables/{}", name), None::<&()>)
            .await;
        if !result.is_success() {
            tracing::warn!(name, code = %result.code, message = %result.message, "Variable fetch failed");
            return None;
        }

        let value = result.data;
        if let Some(text) = value.as_deref() {
            if !text.is_empty() {
                self.store
                    .set(&key, serde_json::Value::String(text.to_string()));
            }
        }
        value
    }
}
