//! 令牌样式表路由

use crate::theme;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::OnceLock;

/// 编译好的样式表，进程生命周期内只生成一次
static STYLESHEET: OnceLock<String> = OnceLock::new();

/// 下发设计令牌样式表
///
/// 模板层通过 `<link rel="stylesheet" href="/theme.css">` 引用
pub async fn theme_css() -> impl IntoResponse {
    let css = STYLESHEET.get_or_init(theme::stylesheet);

    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css.as_str(),
    )
}
