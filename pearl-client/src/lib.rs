//! Pearl Client - HTTP access layer for the back-office portal API
//!
//! Issues requests against the portal backend, normalizes every
//! response and transport failure into [`shared::ApiResult`], and
//! carries the portal's cross-cutting concerns: session-expiry
//! interception, success/error notification, reference-data caching
//! and spreadsheet export.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod hooks;
pub mod key;
pub mod reference;
pub mod storage;

pub use builder::PortalClientBuilder;
pub use client::PortalClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use export::ExportFile;
pub use hooks::{ActivityHook, Navigator, Notifier, ERROR_ROUTE, LOGIN_ROUTE};
pub use key::{CompositeKey, KeyPart, ResourceKey};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

// Re-export shared types for convenience
pub use shared::{codes, ApiResult, CodeItem};
