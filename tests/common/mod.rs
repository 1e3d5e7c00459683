#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use snippet_runner::{AppState, clients::Judge0Client, config::Config};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tower::ServiceExt;

/// 不可达的地址，用于不需要数据库或缓存的测试
pub const UNREACHABLE_DATABASE_URL: &str = "postgres://postgres@127.0.0.1:1/snippets";
pub const UNREACHABLE_REDIS_URL: &str = "redis://127.0.0.1:1/";

pub fn test_config(database_url: &str, redis_url: &str, judge0_base_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        redis_url: redis_url.to_string(),
        judge0_api_key: "test-key".to_string(),
        judge0_base_url: judge0_base_url.to_string(),
        judge0_host: "judge0.test".to_string(),
        snippets_cache_ttl_secs: 60,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}

pub fn build_state(pool: PgPool, config: Config) -> AppState {
    let redis = redis::Client::open(config.redis_url.clone()).unwrap();
    let judge = Judge0Client::new(&config).unwrap();

    AppState {
        pool,
        config,
        redis: Arc::new(redis),
        judge,
    }
}

/// 数据库和缓存都不可达的状态；连接池延迟连接
pub fn offline_state(judge0_base_url: &str) -> AppState {
    let config = test_config(UNREACHABLE_DATABASE_URL, UNREACHABLE_REDIS_URL, judge0_base_url);
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy(&config.database_url)
        .unwrap();

    build_state(pool, config)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
