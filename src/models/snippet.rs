use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::Language;

/// 列表接口中 source_code 保留的最大字符数
pub const SUMMARY_SOURCE_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Snippet {
    pub id: i32,
    pub username: String,
    pub code_language: String,
    pub stdin: String,
    pub source_code: String,
    pub timestamp: DateTime<Utc>,
}

/// 列表投影：字段与 Snippet 相同，区别只在 source_code 最多保留 SUMMARY_SOURCE_CHARS 个字符。
/// 单独成型是为了让截断后的数据不会被当作完整记录使用（例如提交运行）；缓存中保存的也是这个结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SnippetSummary {
    pub id: i32,
    pub username: String,
    pub code_language: String,
    pub stdin: String,
    pub source_code: String,
    pub timestamp: DateTime<Utc>,
}

/// 已校验的新建数据
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub username: String,
    pub language: Language,
    pub stdin: String,
    pub source_code: String,
}

impl From<Snippet> for SnippetSummary {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: snippet.id,
            username: snippet.username,
            code_language: snippet.code_language,
            stdin: snippet.stdin,
            source_code: truncate_chars(snippet.source_code, SUMMARY_SOURCE_CHARS),
            timestamp: snippet.timestamp,
        }
    }
}

fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}

impl Snippet {
    pub async fn create(pool: &PgPool, new: &NewSnippet) -> Result<Self, sqlx::Error> {
        let snippet = sqlx::query_as::<_, Snippet>(
            r#"
            INSERT INTO snippets (username, code_language, stdin, source_code)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, code_language, stdin, source_code, "timestamp"
            "#,
        )
        .bind(&new.username)
        .bind(new.language.name())
        .bind(&new.stdin)
        .bind(&new.source_code)
        .fetch_one(pool)
        .await?;

        Ok(snippet)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Snippet>(
            r#"
            SELECT id, username, code_language, stdin, source_code, "timestamp"
            FROM snippets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        tracing::debug!("Deleted {} row(s) for snippet {}", result.rows_affected(), id);
        Ok(())
    }
}

impl SnippetSummary {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, SnippetSummary>(
            r#"
            SELECT
                id,
                username,
                code_language,
                stdin,
                SUBSTRING(source_code FROM 1 FOR $1) AS source_code,
                "timestamp"
            FROM snippets
            ORDER BY id
            "#,
        )
        .bind(SUMMARY_SOURCE_CHARS as i32)
        .fetch_all(pool)
        .await
    }
}
