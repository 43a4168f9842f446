//! 远程内容访问模块
//!
//! 这个模块提供了对两个外部源站的访问能力：
//! - 后端 API 源站（项目列表、项目详情、评论）
//! - 静态桶源站（markdown 文档）

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_client, ApiConnection};
pub use error::ApiError;
pub use models::comment::CommentWithUser;
pub use models::page::{Page, Pager};
pub use models::project::{Project, ProjectPreview};
pub use repositories::{
    content::ContentRepository, project::ProjectRepository, traits::ContentRepositoryTrait,
    traits::ProjectRepositoryTrait,
};

/// 远程访问操作结果类型
pub type ApiResult<T> = Result<T, ApiError>;
