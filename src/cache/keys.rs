/// 片段列表快照的缓存键
const SNIPPETS_KEY: &str = "snippets";

/// 生成片段列表缓存键
pub fn snippets_key() -> String {
    SNIPPETS_KEY.to_string()
}
