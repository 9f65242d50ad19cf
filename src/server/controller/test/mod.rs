use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::quiz::picker::QuestionPicker, state::AppState};


/// Builds the full router over an in-memory database seeded with the standard data set.
async fn seeded_app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    factory::seed_trivia(&db).await.unwrap();

    (app(db.clone()), db)
}

fn app(db: DatabaseConnection) -> Router {
    router().with_state(AppState::new(db, QuestionPicker::seeded(7)))
}

/// Sends a request and returns the status with the decoded JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(body) => send_raw(app, method, uri, Some("application/json"), body.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Asserts the fixed error envelope for a status code.
fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(
        body,
        &json!({
            "success": false,
            "error": expected.as_u16(),
            "message": message
        })
    );
}
