//! Uniform response envelope.

use serde::{Deserialize, Serialize};

/// Wrapper for every API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn error_with_details(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error_fields() {
        let json = serde_json::to_string(&ApiResponse::success(42)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":42}"#);
    }

    #[test]
    fn error_omits_data() {
        let json =
            serde_json::to_string(&ApiResponse::<()>::error_with_details("bad", vec!["x".into()]))
                .unwrap();
        assert_eq!(json, r#"{"success":false,"message":"bad","errors":["x"]}"#);
    }
}
