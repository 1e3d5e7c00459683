use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, middleware::log_errors, routes};

// 片段相关的路由
fn snippet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/snippets",
            get(routes::snippet::list_snippets).post(routes::snippet::create_snippet),
        )
        .route(
            "/snippets/{id}",
            get(routes::snippet::get_snippet).delete(routes::snippet::delete_snippet),
        )
}

// 判题代理路由
fn judge_routes() -> Router<AppState> {
    Router::new()
        .route("/submitCode", post(routes::judge::submit_code))
        .route("/checkResult/{token}", get(routes::judge::check_result))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(snippet_routes())
        .merge(judge_routes())
        .route("/languages", get(routes::language::list_languages))
        .route("/ping", get(routes::health::ping));

    Router::new()
        .route("/", get(routes::web::index))
        .route("/snippets", get(routes::web::snippets_page))
        .nest("/api", api)
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        // 前端可能由其他源提供，允许所有来源
        .layer(CorsLayer::permissive())
        .with_state(state)
}
