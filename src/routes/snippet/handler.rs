use axum::extract::{Json, Path, State};

use super::model::{
    CreateSnippetRequest, CreateSnippetResponse, MessageResponse, parse_snippet_id,
};
use crate::{
    AppState,
    cache::SnippetCacheOperations,
    error::AppError,
    models::{Snippet, SnippetSummary},
};

#[axum::debug_handler]
pub async fn create_snippet(
    State(state): State<AppState>,
    Json(req): Json<CreateSnippetRequest>,
) -> Result<Json<CreateSnippetResponse>, AppError> {
    let new = req.validate()?;

    let snippet = Snippet::create(&state.pool, &new).await.map_err(|e| {
        tracing::error!("Error adding snippet: {}", e);
        AppError::FailedToAddSnippet
    })?;
    let id = snippet.id;

    // 插入已成功，但缓存更新失败仍然向调用方报错
    SnippetCacheOperations::append_snippet(
        &state.redis,
        snippet.into(),
        state.config.snippets_cache_ttl_secs,
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating cache after insert of snippet {}: {}", id, e);
        AppError::FailedToUpdateCache
    })?;

    Ok(Json(CreateSnippetResponse {
        message: "Snippet added successfully".to_string(),
        id,
    }))
}

#[axum::debug_handler]
pub async fn list_snippets(
    State(state): State<AppState>,
) -> Result<Json<Vec<SnippetSummary>>, AppError> {
    match SnippetCacheOperations::get_snippets(&state.redis).await {
        Ok(Some(snippets)) => {
            tracing::debug!("Get snippets from cache");
            return Ok(Json(snippets));
        }
        Ok(None) => tracing::debug!("Snippets cache miss"),
        Err(e) => {
            tracing::error!("Redis get error: {}", e);
            return Err(AppError::FailedToFetchFromCache);
        }
    }

    let snippets = SnippetSummary::list(&state.pool).await.map_err(|e| {
        tracing::error!("Error fetching snippets: {}", e);
        AppError::FailedToFetchSnippets
    })?;

    // 回填缓存，不等待写入完成
    let redis = state.redis.clone();
    let ttl = state.config.snippets_cache_ttl_secs;
    let cached = snippets.clone();
    tokio::spawn(async move {
        if let Err(e) = SnippetCacheOperations::set_snippets(&redis, &cached, ttl).await {
            tracing::warn!("Failed to populate snippets cache: {}", e);
        }
    });

    Ok(Json(snippets))
}

#[axum::debug_handler]
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Snippet>, AppError> {
    let id = parse_snippet_id(&id)?;
    match Snippet::find_by_id(&state.pool, id).await {
        Ok(Some(snippet)) => Ok(Json(snippet)),
        Ok(None) => Err(AppError::SnippetNotFound),
        Err(e) => {
            tracing::error!("Error fetching snippet {}: {}", id, e);
            Err(AppError::FailedToFetchSnippet)
        }
    }
}

#[axum::debug_handler]
pub async fn delete_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_snippet_id(&id)?;

    // 不存在的 id 同样返回成功
    Snippet::delete(&state.pool, id).await.map_err(|e| {
        tracing::error!("Error deleting snippet {}: {}", id, e);
        AppError::FailedToDeleteSnippet
    })?;

    // 缓存失败只记录日志，删除仍视为成功
    if let Err(e) = SnippetCacheOperations::remove_snippet(
        &state.redis,
        id,
        state.config.snippets_cache_ttl_secs,
    )
    .await
    {
        tracing::error!("Error updating cache after delete of snippet {}: {}", id, e);
    }

    Ok(Json(MessageResponse {
        message: "Snippet deleted successfully".to_string(),
    }))
}
