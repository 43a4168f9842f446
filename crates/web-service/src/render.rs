//! markdown 渲染
//!
//! 桶上的文档都是一方内容，渲染时不做额外的清洗

/// 把 markdown 文本渲染为 HTML 片段
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
