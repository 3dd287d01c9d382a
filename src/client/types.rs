//! Status API Types
//!
//! Request and response shapes of the status-check API. Responses are never
//! validated beyond their status code; the typed views here exist for logging.

use serde::{Deserialize, Serialize};

/// HTTP method used by a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Body for creating a status check
/// Endpoint: POST /status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheckCreate {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

/// A stored status check record
/// Endpoints: POST /status (single), GET /status (array)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(default)]
    pub id: Option<String>,
    pub client_name: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Status code and raw body of a completed exchange
///
/// The body is kept as text so a non-JSON reply can still be reported
/// verbatim on a status mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Decode the body as JSON, falling back to an empty object
    pub fn json_or_empty(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }

    #[test]
    fn test_create_body_shape() {
        let body = serde_json::to_value(StatusCheckCreate::new("test_client_120000")).unwrap();
        assert_eq!(body, json!({ "client_name": "test_client_120000" }));
    }

    #[test]
    fn test_status_check_tolerates_missing_fields() {
        let check: StatusCheck = serde_json::from_value(json!({ "client_name": "a" })).unwrap();
        assert_eq!(check.client_name, "a");
        assert!(check.id.is_none());
    }

    #[test]
    fn test_json_or_empty() {
        let resp = RawResponse {
            status: 200,
            body: r#"[{"client_name":"a"}]"#.to_string(),
        };
        assert!(resp.json_or_empty().is_array());

        let resp = RawResponse {
            status: 200,
            body: "<html>ok</html>".to_string(),
        };
        assert_eq!(resp.json_or_empty(), json!({}));

        let resp = RawResponse {
            status: 200,
            body: String::new(),
        };
        assert_eq!(resp.json_or_empty(), json!({}));
    }
}
