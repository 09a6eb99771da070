//! API Response types
//!
//! Standardized response envelope for the portal API

use serde::{Deserialize, Serialize};

use crate::codes;

/// Unified API response structure
///
/// Every endpoint resolves to this format, on success and error
/// statuses alike:
/// ```json
/// {
///     "code": "S001",
///     "message": "Saved",
///     "data": { ... },
///     "paginationTotalLength": 42
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    /// Result code (`S`-prefixed = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success paths with a payload)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Total row count for paginated list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_total_length: Option<u64>,
}

impl<T> ApiResult<T> {
    /// Create a successful response
    pub fn ok(code: impl Into<String>, message: impl Into<String>, data: T) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Some(data),
            pagination_total_length: None,
        }
    }

    /// Create a failure response (no payload)
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
            pagination_total_length: None,
        }
    }

    /// Attach a pagination total to the response
    pub fn with_pagination_total(mut self, total: u64) -> Self {
        self.pagination_total_length = Some(total);
        self
    }

    /// Whether the result code denotes success
    pub fn is_success(&self) -> bool {
        codes::is_success(&self.code)
    }

    /// Consume the result, returning the payload if any
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_success() {
        let result = ApiResult::ok("S002", "Saved", 7);
        assert!(result.is_success());
        assert_eq!(result.data, Some(7));
        assert!(result.pagination_total_length.is_none());
    }

    #[test]
    fn test_failure_is_not_success() {
        let result: ApiResult<()> = ApiResult::failure("F001", "Save failed");
        assert!(!result.is_success());
        assert!(result.data.is_none());
    }

    #[test]
    fn test_pagination_field_name() {
        let result = ApiResult::ok("S000", "OK", vec![1, 2]).with_pagination_total(42);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"paginationTotalLength\":42"));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"code":"F004","message":"Session expired"}"#;
        let result: ApiResult<String> = serde_json::from_str(json).unwrap();
        assert_eq!(result.code, "F004");
        assert_eq!(result.message, "Session expired");
        assert!(result.data.is_none());
        assert!(result.pagination_total_length.is_none());
    }

    #[test]
    fn test_into_data() {
        let result = ApiResult::ok("S000", "OK", "hello".to_string());
        assert_eq!(result.into_data().as_deref(), Some("hello"));
    }
}
