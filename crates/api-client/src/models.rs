//! 线上数据模型模块
//!
//! 这里定义与后端 API 返回的 JSON 对应的结构体，字段名在线上统一为 camelCase

pub mod comment;
pub mod page;
pub mod project;

// 重新导出具体的模型
pub use comment::CommentWithUser;
pub use page::{Page, Pager};
pub use project::{Project, ProjectPreview};
