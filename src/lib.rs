use clients::Judge0Client;
use config::Config;
use redis::Client as RedisClient;
use sqlx::PgPool;
use std::sync::Arc;

pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub redis: Arc<RedisClient>,
    pub judge: Judge0Client,
}
