//! Reference-data types
//!
//! Small, slow-changing lookup datasets served by the backend:
//! classification code groups and named configuration variables.
//! Suitable for client-side caching without invalidation.

use serde::{Deserialize, Serialize};

/// One entry of a classification code group
///
/// The shape the code tables serve for select lists: a stored value
/// and the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeItem {
    pub value: String,
    pub text: String,
}

impl CodeItem {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}
