/// 缓存模块
/// 片段列表的读穿缓存
pub mod keys;
pub mod snippet;

pub use snippet::SnippetCacheOperations;
