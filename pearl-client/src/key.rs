//! Resource keys and URL path segments
//!
//! Most resources are addressed by a single id; some need up to three
//! ordered path parts. Both forms resolve to a trailing URL segment
//! appended to the resource path.

use std::fmt;

/// One part of a resource key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    Num(i64),
    Text(String),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Num(n) => write!(f, "{}", n),
            KeyPart::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for KeyPart {
    fn from(value: i32) -> Self {
        KeyPart::Num(value as i64)
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        KeyPart::Num(value)
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Text(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Text(value)
    }
}

/// Ordered 1-to-3 part identifier for resources a single id cannot address
///
/// Parts resolve in fixed order (key, key2, key3); absent parts are
/// omitted from the path with no placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    pub key: KeyPart,
    pub key2: Option<KeyPart>,
    pub key3: Option<KeyPart>,
}

impl CompositeKey {
    pub fn new(key: impl Into<KeyPart>) -> Self {
        Self {
            key: key.into(),
            key2: None,
            key3: None,
        }
    }

    pub fn with_key2(mut self, key2: impl Into<KeyPart>) -> Self {
        self.key2 = Some(key2.into());
        self
    }

    pub fn with_key3(mut self, key3: impl Into<KeyPart>) -> Self {
        self.key3 = Some(key3.into());
        self
    }
}

/// A scalar id or a composite key addressing one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKey {
    Single(KeyPart),
    Composite(CompositeKey),
}

impl ResourceKey {
    /// Build the trailing URL path segment for this key
    ///
    /// Scalar `5` becomes `"5/"`; a composite concatenates each present
    /// part suffixed with `/` in order.
    pub fn path_segment(&self) -> String {
        match self {
            ResourceKey::Single(part) => format!("{}/", part),
            ResourceKey::Composite(composite) => {
                let mut segment = format!("{}/", composite.key);
                if let Some(key2) = &composite.key2 {
                    segment.push_str(&format!("{}/", key2));
                }
                if let Some(key3) = &composite.key3 {
                    segment.push_str(&format!("{}/", key3));
                }
                segment
            }
        }
    }
}

impl From<KeyPart> for ResourceKey {
    fn from(value: KeyPart) -> Self {
        ResourceKey::Single(value)
    }
}

impl From<i32> for ResourceKey {
    fn from(value: i32) -> Self {
        ResourceKey::Single(value.into())
    }
}

impl From<i64> for ResourceKey {
    fn from(value: i64) -> Self {
        ResourceKey::Single(value.into())
    }
}

impl From<&str> for ResourceKey {
    fn from(value: &str) -> Self {
        ResourceKey::Single(value.into())
    }
}

impl From<String> for ResourceKey {
    fn from(value: String) -> Self {
        ResourceKey::Single(value.into())
    }
}

impl From<CompositeKey> for ResourceKey {
    fn from(value: CompositeKey) -> Self {
        ResourceKey::Composite(value)
    }
}
