//! In-process stand-ins for the upstream APIs, plus router helpers for handler tests.

use crate::app::build_router;
use crate::config::{Config, DEFAULT_GEOCODE_USER_AGENT};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header::USER_AGENT, HeaderMap, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json, Router,
};
use reqwest::Url;
use serde_json::{json, Value as JsonValue};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// What the fake upstream saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RecordedRequest>>>);

impl RequestLog {
    fn push(&self, request: RecordedRequest) {
        self.0.lock().unwrap().push(request);
    }

    pub fn all(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.all().pop().expect("fake upstream received no requests")
    }
}

pub struct FakeUpstream {
    pub base: Url,
    pub log: RequestLog,
}

impl FakeUpstream {
    pub fn url(&self, path: &str) -> Url {
        self.base.join(path).unwrap()
    }
}

pub fn iss_position_payload() -> JsonValue {
    json!({
        "message": "success",
        "timestamp": 1717000000,
        "iss_position": { "latitude": "-12.3456", "longitude": "101.2345" }
    })
}

pub fn iss_crew_payload() -> JsonValue {
    json!({
        "message": "success",
        "number": 2,
        "people": [
            { "craft": "ISS", "name": "Oleg Kononenko" },
            { "craft": "ISS", "name": "Tracy Dyson" }
        ]
    })
}

/// Routes:
/// - `/iss-now.json`, `/astros.json`: fixed payloads
/// - `/html`: 200 with a non-JSON body
/// - `/unavailable`: 503 with a JSON body
/// - anything else: echoes `{ "path", "query" }`
async fn respond(State(log): State<RequestLog>, uri: Uri, headers: HeaderMap) -> Response {
    log.push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match uri.path() {
        "/iss-now.json" => Json(iss_position_payload()).into_response(),
        "/astros.json" => Json(iss_crew_payload()).into_response(),
        "/html" => Html("<html><body>Access denied</body></html>").into_response(),
        "/unavailable" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "maintenance" })),
        )
            .into_response(),
        path => Json(json!({ "path": path, "query": uri.query().unwrap_or("") })).into_response(),
    }
}

pub async fn spawn_fake_upstream() -> FakeUpstream {
    let log = RequestLog::default();
    let app = Router::new().fallback(respond).with_state(log.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base: Url::parse(&format!("http://{}/", addr)).unwrap(),
        log,
    }
}

/// A URL nothing is listening on
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/gone", addr)).unwrap()
}

pub fn test_config(upstream: &FakeUpstream, static_dir: &str) -> Config {
    Config {
        service_port: 3000,
        service_host: "127.0.0.1".to_string(),
        static_dir: static_dir.to_string(),
        team_history_url: upstream.url("teams"),
        iss_position_url: upstream.url("iss-now.json"),
        iss_crew_url: upstream.url("astros.json"),
        reverse_geocode_url: upstream.url("reverse"),
        geocode_user_agent: DEFAULT_GEOCODE_USER_AGENT.to_string(),
    }
}

pub fn test_app(config: Config) -> Router {
    build_router(AppState::new(config).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, JsonValue) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
