//! Uniform JSON envelope for invoice endpoints.

use serde::{Deserialize, Serialize};

/// Response body carrying either a payload or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response wrapping `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Failed response carrying a message for the caller.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_message() {
        let json = serde_json::to_value(ApiResponse::success("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": "ok" }));
    }

    #[test]
    fn error_omits_data() {
        let json = serde_json::to_value(ApiResponse::<String>::error("bad")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "bad" })
        );
    }
}
