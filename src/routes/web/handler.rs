use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../../static/index.html");
static SNIPPETS_HTML: &str = include_str!("../../../static/snippets.html");

/// 提交表单页
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 片段列表页
pub async fn snippets_page() -> Html<&'static str> {
    Html(SNIPPETS_HTML)
}
