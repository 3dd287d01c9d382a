//! Mock status-check API for testing
//!
//! Serves the three endpoints the checker exercises from a local `wiremock`
//! server, under an `/api` prefix. By default it behaves like a healthy
//! backend: the root answers, created status checks are stored and listed.
//! Every endpoint only matches requests that carry
//! `Content-Type: application/json`; anything else gets wiremock's 404.
//!
//! # Example
//!
//! ```rust,no_run
//! use statusprobe_testkit::{MockStatusApi, ResponseTemplate};
//!
//! # async fn example() {
//! // Healthy API
//! let api = MockStatusApi::start().await;
//!
//! // API whose create endpoint answers 201
//! let api = MockStatusApi::builder()
//!     .create(ResponseTemplate::new(201))
//!     .start()
//!     .await;
//! println!("{}", api.base_url());
//! # }
//! ```

use serde_json::{Value, json};
use std::sync::{Arc, Mutex, MutexGuard};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Path prefix all mock endpoints live under
pub const API_PREFIX: &str = "/api";

/// Timestamp stamped on every stored record
const FIXED_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Status checks created so far, shared between the create and list responders
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    records: Arc<Mutex<Vec<Value>>>,
}

impl StatusStore {
    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of stored records
    pub fn records(&self) -> Vec<Value> {
        self.lock().clone()
    }

    fn insert(&self, client_name: Value) -> Value {
        let mut records = self.lock();
        let record = json!({
            "id": format!("status-{}", records.len() + 1),
            "client_name": client_name,
            "timestamp": FIXED_TIMESTAMP,
        });
        records.push(record.clone());
        record
    }
}

/// Stores the posted `client_name` and echoes the new record
struct CreateResponder(StatusStore);

impl Respond for CreateResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(v) => v,
            Err(_) => return ResponseTemplate::new(422),
        };
        match body.get("client_name") {
            Some(name) if name.is_string() => {
                ResponseTemplate::new(200).set_body_json(self.0.insert(name.clone()))
            }
            _ => ResponseTemplate::new(422),
        }
    }
}

/// Lists stored records as a JSON array
struct ListResponder(StatusStore);

impl Respond for ListResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(Value::Array(self.0.records()))
    }
}

/// How an endpoint backed by the store should answer
#[derive(Debug, Clone)]
enum Reply {
    Store,
    Fixed(ResponseTemplate),
}

/// Builder for a [`MockStatusApi`] with per-endpoint overrides
#[derive(Debug, Clone)]
pub struct MockStatusApiBuilder {
    root: ResponseTemplate,
    create: Reply,
    list: Reply,
}

impl Default for MockStatusApiBuilder {
    fn default() -> Self {
        Self {
            root: ResponseTemplate::new(200).set_body_json(json!({ "message": "Hello World" })),
            create: Reply::Store,
            list: Reply::Store,
        }
    }
}

impl MockStatusApiBuilder {
    /// Override the `GET /` reply
    pub fn root(mut self, response: ResponseTemplate) -> Self {
        self.root = response;
        self
    }

    /// Override the `POST /status` reply
    pub fn create(mut self, response: ResponseTemplate) -> Self {
        self.create = Reply::Fixed(response);
        self
    }

    /// Override the `GET /status` reply
    pub fn list(mut self, response: ResponseTemplate) -> Self {
        self.list = Reply::Fixed(response);
        self
    }

    /// Start the server and mount all three endpoints
    pub async fn start(self) -> MockStatusApi {
        let server = MockServer::start().await;
        let store = StatusStore::default();
        let root_path = format!("{API_PREFIX}/");
        let status_path = format!("{API_PREFIX}/status");

        Mock::given(method("GET"))
            .and(path(root_path.as_str()))
            .and(header("content-type", "application/json"))
            .respond_with(self.root)
            .mount(&server)
            .await;

        let create = Mock::given(method("POST"))
            .and(path(status_path.as_str()))
            .and(header("content-type", "application/json"));
        match self.create {
            Reply::Store => create.respond_with(CreateResponder(store.clone())),
            Reply::Fixed(response) => create.respond_with(response),
        }
        .mount(&server)
        .await;

        let list = Mock::given(method("GET"))
            .and(path(status_path.as_str()))
            .and(header("content-type", "application/json"));
        match self.list {
            Reply::Store => list.respond_with(ListResponder(store.clone())),
            Reply::Fixed(response) => list.respond_with(response),
        }
        .mount(&server)
        .await;

        MockStatusApi { server, store }
    }
}

/// A running mock of the status-check API
pub struct MockStatusApi {
    server: MockServer,
    store: StatusStore,
}

impl MockStatusApi {
    /// Start a healthy mock
    pub async fn start() -> Self {
        Self::builder().start().await
    }

    pub fn builder() -> MockStatusApiBuilder {
        MockStatusApiBuilder::default()
    }

    /// Base URL to hand to the checker (`http://127.0.0.1:<port>/api`)
    pub fn base_url(&self) -> String {
        format!("{}{API_PREFIX}", self.server.uri())
    }

    /// Records stored through `POST /status`
    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    /// `client_name` of every `POST /status` request received, in order
    pub async fn created_client_names(&self) -> Vec<String> {
        self.received()
            .await
            .into_iter()
            .filter(|r| r.method.as_str() == "POST")
            .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
            .filter_map(|v| v.get("client_name")?.as_str().map(str::to_string))
            .collect()
    }

    /// `METHOD path` of every request received, in order
    pub async fn request_log(&self) -> Vec<String> {
        self.received()
            .await
            .into_iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.url.path()))
            .collect()
    }

    async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn send(method: reqwest::Method, url: String, body: Option<Value>) -> reqwest::Response {
        let mut req = reqwest::Client::new()
            .request(method, url)
            .header("content-type", "application/json");
        if let Some(body) = body {
            req = req.body(body.to_string());
        }
        req.send().await.unwrap()
    }

    #[tokio::test]
    async fn test_healthy_api_stores_and_lists() {
        let api = MockStatusApi::start().await;
        let base = api.base_url();

        let root = send(reqwest::Method::GET, format!("{base}/"), None).await;
        assert_eq!(root.status().as_u16(), 200);

        let created = send(
            reqwest::Method::POST,
            format!("{base}/status"),
            Some(json!({ "client_name": "a" })),
        )
        .await;
        assert_eq!(created.status().as_u16(), 200);
        let created: Value = created.json().await.unwrap();
        assert_eq!(created["client_name"], "a");
        assert_eq!(created["id"], "status-1");

        let listed = send(reqwest::Method::GET, format!("{base}/status"), None).await;
        let listed: Value = listed.json().await.unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 1);

        assert_eq!(api.created_client_names().await, vec!["a"]);
        assert_eq!(
            api.request_log().await,
            vec!["GET /api/", "POST /api/status", "GET /api/status"]
        );
    }

    #[tokio::test]
    async fn test_create_rejects_missing_client_name() {
        let api = MockStatusApi::start().await;
        let resp = send(
            reqwest::Method::POST,
            format!("{}/status", api.base_url()),
            Some(json!({})),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 422);
        assert!(api.store().records().is_empty());
    }

    #[tokio::test]
    async fn test_fixed_override() {
        let api = MockStatusApi::builder()
            .list(ResponseTemplate::new(503))
            .start()
            .await;
        let resp = send(reqwest::Method::GET, format!("{}/status", api.base_url()), None).await;
        assert_eq!(resp.status().as_u16(), 503);
    }

    #[tokio::test]
    async fn test_requires_json_content_type() {
        let api = MockStatusApi::start().await;
        let resp = reqwest::get(format!("{}/", api.base_url())).await.unwrap();
        assert_eq!(resp.status().as_u16(), 404);
    }
}
