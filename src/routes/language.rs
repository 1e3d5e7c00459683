use axum::Json;

use crate::models::{Language, LanguageInfo};

/// 前端使用的语言列表及 Judge0 编号
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(LanguageInfo::from).collect())
}
