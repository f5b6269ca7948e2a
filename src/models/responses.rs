//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the greeting endpoint (GET /api)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataResponse {
    /// Greeting text
    pub message: String,
}

impl DataResponse {
    /// Creates a new DataResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for unmatched routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    /// Always 404
    pub status_code: u16,
    /// "Cannot <METHOD> <path>"
    pub message: String,
    /// Reason phrase
    pub error: String,
}

impl NotFoundResponse {
    /// Creates a NotFoundResponse for the given request line
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            status_code: 404,
            message: format!("Cannot {} {}", method, path),
            error: "Not Found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_response_serialize() {
        let resp = DataResponse::new("Hello API");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"Hello API"}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_not_found_response_serialize() {
        let resp = NotFoundResponse::new("GET", "/missing");
        let json: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["message"], "Cannot GET /missing");
        assert_eq!(json["error"], "Not Found");
    }
}
