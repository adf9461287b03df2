//! End-to-end tests for the follow-up call proxy endpoint, run against a
//! stub call-initiation upstream bound on a random local port.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use vigil_outbound::{ElevenLabsConfig, OutboundCallClient};
use vigil_server::{app, AppState};

struct StubUpstream {
    base_url: String,
    hits: Arc<AtomicUsize>,
    last_payload: Arc<Mutex<Option<Value>>>,
}

impl StubUpstream {
    fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn last_payload(&self) -> Option<Value> {
        self.last_payload.lock().unwrap().clone()
    }
}

/// Binds a stub of the platform's call-initiation endpoint that records each
/// request and answers with a fixed status and body.
async fn spawn_stub(status: StatusCode, body: Value) -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_payload: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));

    let hits_handler = hits.clone();
    let payload_handler = last_payload.clone();
    let router = Router::new().route(
        "/v1/convai/twilio/outbound-call",
        post(move |Json(payload): Json<Value>| {
            let hits = hits_handler.clone();
            let last = payload_handler.clone();
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last.lock().unwrap() = Some(payload);
                (status, Json(body)).into_response()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{}", addr),
        hits,
        last_payload,
    }
}

fn configured_app(base_url: &str) -> Router {
    let config = ElevenLabsConfig::new("test-key", "agent-alex", "phone-1")
        .with_api_base_url(base_url);
    app(AppState {
        outbound: Arc::new(OutboundCallClient::new(config)),
    })
}

async fn post_outbound(app: Router, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/outbound-call")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_request() -> Value {
    json!({
        "phoneNumber": "+15551234567",
        "transcript": [
            {"speaker": "You", "text": "hello", "timestamp": "10:00:00"},
            {"speaker": "Andrew", "text": "hi, how can I help?", "timestamp": "10:00:04"}
        ]
    })
}

fn assert_case_reference_shape(reference: &str) {
    let mut parts = reference.splitn(3, '-');
    assert_eq!(parts.next(), Some("PV"));
    let millis = parts.next().expect("millis segment");
    assert!(millis.parse::<i64>().is_ok(), "bad millis: {}", millis);
    let suffix = parts.next().expect("suffix segment");
    assert_eq!(suffix.len(), 6);
    assert!(suffix
        .bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
}

#[tokio::test]
async fn valid_request_initiates_a_call_and_returns_the_case_reference() {
    let stub = spawn_stub(StatusCode::OK, json!({"conversation_id": "conv_123"})).await;
    let app = configured_app(&stub.base_url);

    let (status, body) = post_outbound(app, Body::from(valid_request().to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["callId"], "conv_123");
    assert_case_reference_shape(body["caseReference"].as_str().unwrap());
    assert_eq!(stub.hit_count(), 1);
}

#[tokio::test]
async fn transcript_and_case_context_are_forwarded_as_dynamic_variables() {
    let stub = spawn_stub(StatusCode::OK, json!({"conversation_id": "conv_123"})).await;
    let app = configured_app(&stub.base_url);

    let request = json!({
        "phoneNumber": "+1 555 123 4567",
        "transcript": [
            {"speaker": "You", "text": "first", "timestamp": "10:00:00"},
            {"speaker": "Andrew", "text": "second", "timestamp": "10:00:05"}
        ]
    });
    let (status, _) = post_outbound(app, Body::from(request.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let payload = stub.last_payload().expect("upstream payload");
    assert_eq!(payload["agent_id"], "agent-alex");
    assert_eq!(payload["agent_phone_number_id"], "phone-1");
    // Whitespace stripped from the destination number.
    assert_eq!(payload["to_number"], "+15551234567");

    let variables = &payload["conversation_initiation_client_data"]["dynamic_variables"];
    let transcript = variables["initial_call_transcript"].as_str().unwrap();
    // One line per entry, input order.
    let first = transcript.find("[10:00:00] You: first").unwrap();
    let second = transcript.find("[10:00:05] Andrew: second").unwrap();
    assert!(first < second);
    assert!(variables["call_date"].as_str().unwrap().contains('T'));
    assert_case_reference_shape(variables["case_reference"].as_str().unwrap());
}

#[tokio::test]
async fn invalid_phone_format_is_rejected_without_an_external_call() {
    let stub = spawn_stub(StatusCode::OK, json!({"conversation_id": "x"})).await;
    let app = configured_app(&stub.base_url);

    let request = json!({
        "phoneNumber": "abc",
        "transcript": [{"speaker": "You", "text": "hello", "timestamp": "10:00:00"}]
    });
    let (status, body) = post_outbound(app, Body::from(request.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid phone number format");
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn missing_transcript_field_is_rejected() {
    let stub = spawn_stub(StatusCode::OK, json!({})).await;
    let app = configured_app(&stub.base_url);

    let (status, body) = post_outbound(
        app,
        Body::from(json!({"phoneNumber": "+15551234567"}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: phoneNumber and transcript"
    );
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn non_array_transcript_is_rejected() {
    let stub = spawn_stub(StatusCode::OK, json!({})).await;
    let app = configured_app(&stub.base_url);

    let request = json!({"phoneNumber": "+15551234567", "transcript": "not a list"});
    let (status, body) = post_outbound(app, Body::from(request.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: phoneNumber and transcript"
    );
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn empty_transcript_array_is_rejected() {
    let stub = spawn_stub(StatusCode::OK, json!({})).await;
    let app = configured_app(&stub.base_url);

    let request = json!({"phoneNumber": "+15551234567", "transcript": []});
    let (status, body) = post_outbound(app, Body::from(request.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: phoneNumber and transcript"
    );
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn missing_credentials_yield_a_vague_500_and_no_external_call() {
    let stub = spawn_stub(StatusCode::OK, json!({})).await;
    // Agent id and phone-number id are deliberately absent.
    let config = ElevenLabsConfig::new("test-key", "", "").with_api_base_url(&stub.base_url);
    let app = app(AppState {
        outbound: Arc::new(OutboundCallClient::new(config)),
    });

    let (status, body) = post_outbound(app, Body::from(valid_request().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Server configuration error. Missing required credentials."
    );
    // The response must not leak which credential is missing.
    assert!(body.get("details").is_none());
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn upstream_rejection_is_relayed_with_status_and_details() {
    let stub = spawn_stub(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"detail": "unknown agent"}),
    )
    .await;
    let app = configured_app(&stub.base_url);

    let (status, body) = post_outbound(app, Body::from(valid_request().to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Failed to initiate outbound call");
    assert_eq!(body["details"], "API returned 422: Unprocessable Entity");
    assert_eq!(stub.hit_count(), 1);
}

#[tokio::test]
async fn malformed_json_body_is_a_generic_server_error() {
    let stub = spawn_stub(StatusCode::OK, json!({})).await;
    let app = configured_app(&stub.base_url);

    let (status, body) = post_outbound(app, Body::from("not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].as_str().is_some());
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn unreachable_upstream_is_a_generic_server_error() {
    // Nothing listens on this port.
    let app = configured_app("http://127.0.0.1:1");

    let (status, body) = post_outbound(app, Body::from(valid_request().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].as_str().is_some());
}
