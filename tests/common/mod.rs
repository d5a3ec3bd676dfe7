use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use dokterbubung_api::{events, handlers, store::HospitalStore, AppState};

/// Router wired to a fresh empty store, with a drained event channel.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(HospitalStore::new());
        let (event_sender, mut event_receiver) = events::channel(64);
        tokio::spawn(async move { while event_receiver.recv().await.is_some() {} });

        let state = AppState::new(store, event_sender);
        Self {
            router: handlers::app_router(state),
        }
    }

    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("response")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body bytes")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json response")
}
