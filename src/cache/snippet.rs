use std::sync::Arc;

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys;
use crate::models::SnippetSummary;

/// 片段列表缓存操作
///
/// 整个列表以 JSON 数组保存在一个键下，每次写入都会刷新过期时间。
/// 读-改-写之间没有加锁，并发的新建/删除可能互相覆盖，直到下一次缓存未命中时从数据库重建。
pub struct SnippetCacheOperations;

impl SnippetCacheOperations {
    /// 读取缓存的列表，键不存在或已过期时返回 None
    pub async fn get_snippets(
        redis: &Arc<RedisClient>,
    ) -> Result<Option<Vec<SnippetSummary>>, redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;
        read_list(&mut conn).await
    }

    /// 用新的列表覆盖缓存
    pub async fn set_snippets(
        redis: &Arc<RedisClient>,
        snippets: &[SnippetSummary],
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;
        write_list(&mut conn, snippets, ttl_secs).await
    }

    /// 追加一条记录；缓存为空时从空列表开始
    pub async fn append_snippet(
        redis: &Arc<RedisClient>,
        snippet: SnippetSummary,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let mut snippets = read_list(&mut conn).await?.unwrap_or_default();
        append_to_snapshot(&mut snippets, snippet);

        write_list(&mut conn, &snippets, ttl_secs).await
    }

    /// 从缓存列表中移除指定 id
    pub async fn remove_snippet(
        redis: &Arc<RedisClient>,
        id: i32,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let mut snippets = read_list(&mut conn).await?.unwrap_or_default();
        remove_from_snapshot(&mut snippets, id);

        write_list(&mut conn, &snippets, ttl_secs).await
    }
}

async fn read_list(
    conn: &mut MultiplexedConnection,
) -> Result<Option<Vec<SnippetSummary>>, redis::RedisError> {
    let result: Option<String> = conn.get(keys::snippets_key()).await?;

    match result {
        Some(json) => {
            let snippets = serde_json::from_str(&json).map_err(|e| {
                redis::RedisError::from((
                    redis::ErrorKind::TypeError,
                    "Deserialization error",
                    e.to_string(),
                ))
            })?;
            Ok(Some(snippets))
        }
        None => Ok(None),
    }
}

async fn write_list(
    conn: &mut MultiplexedConnection,
    snippets: &[SnippetSummary],
    ttl_secs: u64,
) -> Result<(), redis::RedisError> {
    let json = serde_json::to_string(snippets).map_err(|e| {
        redis::RedisError::from((
            redis::ErrorKind::IoError,
            "Serialization error",
            e.to_string(),
        ))
    })?;

    let _: () = conn.set_ex(keys::snippets_key(), json, ttl_secs).await?;

    Ok(())
}

pub(crate) fn append_to_snapshot(snippets: &mut Vec<SnippetSummary>, snippet: SnippetSummary) {
    snippets.push(snippet);
}

pub(crate) fn remove_from_snapshot(snippets: &mut Vec<SnippetSummary>, id: i32) {
    snippets.retain(|snippet| snippet.id != id);
}
