// In-memory stand-in for the Violet API

use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const DATE: &str = "2024-01-01T00:00:00+0000";

/// Account configured on the fake API.
#[derive(Debug, Clone)]
pub struct FakeAccount {
    pub username: String,
    pub password: String,
    pub app_id: i64,
    pub app_secret: String,
    /// Token handed out on successful login.
    pub token: String,
    /// Answer bad credentials with `200 {"token": ""}` instead of `401`.
    pub empty_token_on_bad_login: bool,
}

impl Default for FakeAccount {
    fn default() -> Self {
        Self {
            username: "test-user".to_string(),
            password: "test-password".to_string(),
            app_id: 11,
            app_secret: "test-secret".to_string(),
            token: "test-token".to_string(),
            empty_token_on_bad_login: false,
        }
    }
}

/// A request received by the fake API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path below `/v1/`, e.g. `events/webhooks/1000`.
    pub path: String,
}

struct FakeState {
    account: FakeAccount,
    next_id: i64,
    webhooks: BTreeMap<i64, Value>,
    journal: Vec<RecordedRequest>,
}

/// Stateful fake of the Violet webhook endpoints.
///
/// Serves `POST login`, `POST apps/{appId}/webhooks`,
/// `GET events/webhooks/{id}` and `DELETE apps/{appId}/webhooks/{id}` under
/// `/v1/`, checks the application and token headers, and records every
/// request it receives.
pub struct FakeVioletApi {
    server: MockServer,
    state: Arc<Mutex<FakeState>>,
}

impl FakeVioletApi {
    /// Start a fake API with the default account.
    pub async fn start() -> Self {
        Self::start_with(FakeAccount::default()).await
    }

    /// Start a fake API with a custom account.
    pub async fn start_with(account: FakeAccount) -> Self {
        let server = MockServer::start().await;
        let state = Arc::new(Mutex::new(FakeState {
            account,
            next_id: 1000,
            webhooks: BTreeMap::new(),
            journal: Vec::new(),
        }));

        Mock::given(any())
            .respond_with(Router {
                state: state.clone(),
            })
            .mount(&server)
            .await;

        Self { server, state }
    }

    /// Base URL to configure clients with.
    pub fn base_url(&self) -> String {
        format!("{}/v1/", self.server.uri())
    }

    /// The configured account.
    pub fn account(&self) -> FakeAccount {
        self.state.lock().unwrap().account.clone()
    }

    /// Store a webhook directly, as if created outside the client.
    pub fn insert_webhook(&self, event: &str, remote_endpoint: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.create(event, remote_endpoint)["id"]
            .as_i64()
            .unwrap_or_default()
    }

    /// Delete a webhook directly, as if removed outside the client.
    pub fn remove_webhook(&self, id: i64) -> bool {
        self.state.lock().unwrap().webhooks.remove(&id).is_some()
    }

    /// Overwrite a field of a stored webhook.
    pub fn set_field(&self, id: i64, field: &str, value: &str) {
        if let Some(webhook) = self.state.lock().unwrap().webhooks.get_mut(&id) {
            webhook[field] = Value::String(value.to_string());
        }
    }

    /// Stored webhook as JSON.
    pub fn webhook(&self, id: i64) -> Option<Value> {
        self.state.lock().unwrap().webhooks.get(&id).cloned()
    }

    /// Number of stored webhooks.
    pub fn webhook_count(&self) -> usize {
        self.state.lock().unwrap().webhooks.len()
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().journal.clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().journal.len()
    }

    /// Number of requests with the given method and path.
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .journal
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Forget recorded requests.
    pub fn clear_requests(&self) {
        self.state.lock().unwrap().journal.clear();
    }
}

impl FakeState {
    fn create(&mut self, event: &str, remote_endpoint: &str) -> Value {
        let id = self.next_id;
        self.next_id += 1;

        let webhook = json!({
            "id": id,
            "app_id": self.account.app_id,
            "event": event,
            "remote_endpoint": remote_endpoint,
            "status": "ACTIVE",
            "date_created": DATE,
            "date_last_modified": DATE,
        });
        self.webhooks.insert(id, webhook.clone());
        webhook
    }

    fn authorized(&self, request: &Request) -> bool {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        header("X-Violet-App-Id") == Some(self.account.app_id.to_string())
            && header("X-Violet-App-Secret").as_deref() == Some(self.account.app_secret.as_str())
            && header("X-Violet-Token").as_deref() == Some(self.account.token.as_str())
    }

    fn login(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return error(400, "Malformed login request"),
        };

        if body["username"] == self.account.username.as_str()
            && body["password"] == self.account.password.as_str()
        {
            ResponseTemplate::new(200).set_body_json(json!({ "token": self.account.token }))
        } else if self.account.empty_token_on_bad_login {
            ResponseTemplate::new(200).set_body_json(json!({ "token": "" }))
        } else {
            error(401, "Invalid credentials")
        }
    }
}

struct Router {
    state: Arc<Mutex<FakeState>>,
}

impl Respond for Router {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();

        let method = request.method.as_str().to_string();
        let path = request
            .url
            .path()
            .trim_start_matches("/v1/")
            .to_string();
        state.journal.push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
        });

        let segments: Vec<&str> = path.split('/').collect();

        if method == "POST" && segments == ["login"] {
            return state.login(request);
        }

        if !state.authorized(request) {
            return error(401, "Unauthorized");
        }

        let app_id = state.account.app_id.to_string();
        match (method.as_str(), segments.as_slice()) {
            ("POST", ["apps", app, "webhooks"]) => {
                if *app != app_id {
                    return error(403, "App mismatch");
                }
                let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
                match (body["event"].as_str(), body["remote_endpoint"].as_str()) {
                    (Some(event), Some(endpoint)) => {
                        ResponseTemplate::new(200).set_body_json(state.create(event, endpoint))
                    }
                    _ => error(400, "event and remote_endpoint are required"),
                }
            }
            ("GET", ["events", "webhooks", id]) => match parse_id(id) {
                Some(id) => match state.webhooks.get(&id) {
                    Some(webhook) => ResponseTemplate::new(200).set_body_json(webhook.clone()),
                    None => error(404, "Webhook not found"),
                },
                None => error(404, "Webhook not found"),
            },
            ("DELETE", ["apps", app, "webhooks", id]) => {
                if *app != app_id {
                    return error(403, "App mismatch");
                }
                match parse_id(id).and_then(|id| state.webhooks.remove(&id)) {
                    Some(_) => ResponseTemplate::new(200),
                    None => error(404, "Webhook not found"),
                }
            }
            _ => error(404, "Route not found"),
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "code": status, "message": message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_api_lifecycle() {
        let api = FakeVioletApi::start().await;
        let http = reqwest::Client::new();
        let account = api.account();

        let login: Value = http
            .post(format!("{}login", api.base_url()))
            .json(&json!({ "username": account.username, "password": account.password }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(login["token"], "test-token");

        let id = api.insert_webhook("ORDER_UPDATED", "https://example.com/hook");
        let response = http
            .get(format!("{}events/webhooks/{id}", api.base_url()))
            .header("X-Violet-App-Id", "11")
            .header("X-Violet-App-Secret", "test-secret")
            .header("X-Violet-Token", "test-token")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        assert_eq!(api.count("POST", "login"), 1);
        assert_eq!(api.count("GET", &format!("events/webhooks/{id}")), 1);
    }

    #[tokio::test]
    async fn test_fake_api_rejects_missing_token() {
        let api = FakeVioletApi::start().await;
        let id = api.insert_webhook("ORDER_UPDATED", "https://example.com/hook");

        let response = reqwest::Client::new()
            .get(format!("{}events/webhooks/{id}", api.base_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(api.request_count(), 1);
    }
}
