//! Shared types for the Pearl portal
//!
//! Wire contract between the back-office API and its clients:
//! the response envelope, result-code conventions and reference-data
//! types used on both ends.

pub mod codes;
pub mod reference;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use reference::CodeItem;
pub use response::ApiResult;
