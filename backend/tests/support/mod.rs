#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use chrono_tz::America::New_York;
use datetime_webhook_backend::{
    config::Config, routes::build_router, state::AppState, utils::time::FixedClock,
};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        time_zone: New_York,
        ..Config::default()
    }
}

/// Router whose clock is frozen at a New York wall-clock reading.
pub fn app_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Router {
    app_with_config(test_config(), y, m, d, h, min)
}

pub fn app_with_config(config: Config, y: i32, m: u32, d: u32, h: u32, min: u32) -> Router {
    let local = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test datetime");
    let clock = FixedClock::at_local(&New_York, local).expect("representable test datetime");
    build_router(AppState::with_clock(config, Arc::new(clock)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("call app");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
