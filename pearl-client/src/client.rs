//! HTTP client for the portal API
//!
//! Every standard call resolves to an [`ApiResult`]: transport faults
//! are caught and converted, never propagated to the caller. After
//! normalization the session-expiry interceptor runs, and mutating
//! calls optionally notify the user with the result message.

use std::fmt;
use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::Method;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::{codes, ApiResult};

use crate::builder::PortalClientBuilder;
use crate::config::ClientConfig;
use crate::hooks::{ActivityHook, Navigator, Notifier, ERROR_ROUTE, LOGIN_ROUTE};
use crate::key::ResourceKey;
use crate::storage::{KeyValueStore, ACCESS_TOKEN_KEY};

/// Error envelope the server ships on non-2xx statuses
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
}

/// A transport outcome that did not produce a well-formed response
pub(crate) enum Thrown {
    /// Structured failure body from the server
    Api { code: String, message: String },
    /// Network or protocol fault without a structured body
    Transport(String),
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Api { code, message } => write!(f, "{} ({})", message, code),
            Thrown::Transport(message) => write!(f, "{}", message),
        }
    }
}

/// HTTP access layer for the portal backend
///
/// Cheap to clone; the underlying HTTP clients and the injected
/// collaborators are shared.
#[derive(Clone)]
pub struct PortalClient {
    pub(crate) http: Client,
    pub(crate) export_http: Client,
    pub(crate) config: ClientConfig,
    pub(crate) store: Arc<dyn KeyValueStore>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) activity: Arc<dyn ActivityHook>,
}

impl PortalClient {
    /// Creates a builder for a portal client
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::new()
    }

    /// Returns the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the injected key/value store
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Build the authorization header from the stored access token
    pub(crate) fn auth_header(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .and_then(|v| v.as_str().map(|t| format!("Bearer {}", t)))
    }

    // ========== Standard calls ==========

    /// Fetch a list resource: `GET api/<resource>`
    pub async fn get_list<T: DeserializeOwned>(&self, resource: &str) -> ApiResult<T> {
        let result = self
            .request(Method::GET, &format!("api/{}", resource), None::<&()>)
            .await;
        self.intercept(&result).await;
        result
    }

    /// Fetch a single resource without a key: `GET api/<resource>`
    pub async fn get_one<T: DeserializeOwned>(&self, resource: &str) -> ApiResult<T> {
        let result = self
            .request(Method::GET, &format!("api/{}", resource), None::<&()>)
            .await;
        self.intercept(&result).await;
        result
    }

    /// Fetch a single resource by key: `GET api/<resource>/<segment>`
    pub async fn get_by_key<T: DeserializeOwned>(
        &self,
        resource: &str,
        key: impl Into<ResourceKey>,
    ) -> ApiResult<T> {
        let path = Self::keyed_path(resource, &key.into());
        let result = self.request(Method::GET, &path, None::<&()>).await;
        self.intercept(&result).await;
        result
    }

    /// Create a resource: `POST api/<resource>`
    ///
    /// With `alert` the result message is dispatched as a success or
    /// error notification depending on the result code.
    pub async fn post<T, B>(&self, resource: &str, body: &B, alert: bool) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let result = self
            .request(Method::POST, &format!("api/{}", resource), Some(body))
            .await;
        self.intercept(&result).await;
        if alert {
            self.alert_result(&result);
        }
        result
    }

    /// Replace a resource: `PUT api/<resource>/<segment>`
    pub async fn put<T, B>(
        &self,
        resource: &str,
        body: &B,
        key: impl Into<ResourceKey>,
        alert: bool,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let path = Self::keyed_path(resource, &key.into());
        let result = self.request(Method::PUT, &path, Some(body)).await;
        self.intercept(&result).await;
        if alert {
            self.alert_result(&result);
        }
        result
    }

    /// Partially update a resource: `PATCH api/<resource>/<segment>`
    pub async fn patch<T, B>(
        &self,
        resource: &str,
        body: &B,
        key: impl Into<ResourceKey>,
        alert: bool,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let path = Self::keyed_path(resource, &key.into());
        let result = self.request(Method::PATCH, &path, Some(body)).await;
        self.intercept(&result).await;
        if alert {
            self.alert_result(&result);
        }
        result
    }

    /// Delete a resource: `DELETE api/<resource>/<segment>`
    pub async fn delete<T: DeserializeOwned>(
        &self,
        resource: &str,
        key: impl Into<ResourceKey>,
        alert: bool,
    ) -> ApiResult<T> {
        let path = Self::keyed_path(resource, &key.into());
        let result = self.request(Method::DELETE, &path, None::<&()>).await;
        self.intercept(&result).await;
        if alert {
            self.alert_result(&result);
        }
        result
    }

    // ========== Internals ==========

    fn keyed_path(resource: &str, key: &ResourceKey) -> String {
        format!(
            "api/{}/{}",
            resource.trim_end_matches('/'),
            key.path_segment()
        )
    }

    /// Issue one request and normalize whatever comes back
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(auth) = self.auth_header() {
            req = req.header(AUTHORIZATION, auth);
        }

        match self.exchange::<T>(req).await {
            Ok(result) => result,
            Err(thrown) => self.normalize_failure(thrown).await,
        }
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<ApiResult<T>, Thrown> {
        let response = req
            .send()
            .await
            .map_err(|e| Thrown::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| Thrown::Transport(e.to_string()))?;
            if let Ok(body) = serde_json::from_str::<ErrorEnvelope>(&text) {
                if !body.message.is_empty() {
                    return Err(Thrown::Api {
                        code: body.code,
                        message: body.message,
                    });
                }
            }
            return Err(Thrown::Transport(format!(
                "request failed with status code {}",
                status.as_u16()
            )));
        }

        response
            .json::<ApiResult<T>>()
            .await
            .map_err(|e| Thrown::Transport(e.to_string()))
    }

    /// Convert a thrown transport outcome into the canonical result shape
    ///
    /// Structured failure bodies keep their code and message verbatim;
    /// anything else collapses to the fallback failure code with the
    /// transport error's text.
    async fn normalize_failure<T>(&self, thrown: Thrown) -> ApiResult<T> {
        if self.config.diagnostic_redirect {
            tracing::error!(error = %thrown, "API request failed");
            self.navigator.navigate(ERROR_ROUTE).await;
        }
        match thrown {
            Thrown::Api { code, message } => ApiResult::failure(code, message),
            Thrown::Transport(message) => ApiResult::failure(codes::FALLBACK_FAILURE, message),
        }
    }

    /// Session-expiry check plus activity reporting
    ///
    /// Runs once per standard call on the normalized result, whatever
    /// the outcome. Cached reference lookups and exports skip it.
    async fn intercept<T>(&self, result: &ApiResult<T>) {
        if codes::is_session_invalid(&result.code) {
            tracing::debug!(code = %result.code, "Session invalid, requesting re-login");
            self.navigator.navigate(LOGIN_ROUTE).await;
        }
        self.activity.on_activity();
    }

    /// Dispatch the result message as a success or error notification
    fn alert_result<T>(&self, result: &ApiResult<T>) {
        if result.is_success() {
            self.notifier.success(&result.message);
        } else {
            self.notifier.error(&result.message);
        }
    }
}
