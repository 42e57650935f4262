use super::*;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct BackendState {
    tx: Arc<Mutex<Option<oneshot::Sender<(Option<String>, HashMap<String, String>)>>>>,
    status: StatusCode,
    body: Value,
}

async fn handle_submission(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let accept = headers
        .get("accept")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send((accept, payload));
    }
    (state.status, Json(state.body.clone()))
}

async fn spawn_form_backend(
    status: StatusCode,
    body: Value,
) -> (
    Url,
    oneshot::Receiver<(Option<String>, HashMap<String, String>)>,
) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();
    let state = BackendState {
        tx: Arc::new(Mutex::new(Some(tx))),
        status,
        body,
    };
    let app = Router::new()
        .route("/f/testform", post(handle_submission))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let url = Url::parse(&format!("http://{addr}/f/testform")).expect("url");
    (url, rx)
}

fn sample_payload() -> SubmissionPayload {
    let mut payload = SubmissionPayload::new();
    payload.set("nickname", "Amy");
    payload.set("type", "png");
    payload.set("outlineColor", "#FF00AA");
    payload.set("hairHighlights", "None");
    payload
}

#[tokio::test]
async fn accepted_submission_posts_json_payload() {
    let (url, rx) = spawn_form_backend(
        StatusCode::OK,
        json!({"ok": true, "next": "/thanks"}),
    )
    .await;
    let client = FormspreeClient::new(url);

    let outcome = client.submit(&sample_payload()).await;
    assert_eq!(outcome, SubmissionOutcome::Accepted);

    let (accept, received) = rx.await.expect("payload delivered");
    assert_eq!(accept.as_deref(), Some("application/json"));
    assert_eq!(received.get("nickname").map(String::as_str), Some("Amy"));
    assert_eq!(
        received.get("outlineColor").map(String::as_str),
        Some("#FF00AA")
    );
    assert_eq!(received.len(), 4);
}

#[tokio::test]
async fn field_errors_are_keyed_by_field() {
    let (url, _rx) = spawn_form_backend(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "error": "Validation errors",
            "errors": [
                {"field": "referenceImage", "code": "TYPE_URL", "message": "should be a URL"},
                {"code": "FORM_DISABLED", "message": "This form is disabled"}
            ]
        }),
    )
    .await;
    let client = FormspreeClient::new(url);

    let outcome = client.submit(&sample_payload()).await;
    let SubmissionOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(
        errors.fields.get("referenceImage"),
        Some(&vec!["should be a URL".to_string()])
    );
    assert_eq!(errors.form, vec!["This form is disabled".to_string()]);
}

#[tokio::test]
async fn non_json_failure_names_status() {
    let (url, _rx) = spawn_form_backend(StatusCode::BAD_GATEWAY, Value::Null).await;
    let client = FormspreeClient::new(url);

    let err = client
        .try_submit(&sample_payload())
        .await
        .expect_err("should fail");
    assert!(matches!(
        err,
        SubmissionError::UnexpectedResponse { status } if status == StatusCode::BAD_GATEWAY
    ));
}

#[tokio::test]
async fn unreachable_backend_becomes_form_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = FormspreeClient::new(Url::parse(&format!("http://{addr}/f/x")).expect("url"));
    let SubmissionOutcome::Rejected(errors) = client.submit(&sample_payload()).await else {
        panic!("expected rejection");
    };
    assert!(errors.fields.is_empty());
    assert_eq!(errors.form.len(), 1);
    assert!(errors.form[0].starts_with("could not reach the form service"));
}

#[test]
fn client_uses_configured_form_url() {
    let settings = FormBackendSettings {
        endpoint: "https://formspree.io/f/".into(),
        form_id: "abc123".into(),
    };
    let client = FormspreeClient::from_settings(&settings).expect("client");
    assert_eq!(client.submission_url().as_str(), "https://formspree.io/f/abc123");
}
