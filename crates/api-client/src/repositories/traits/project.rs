//! 项目仓库 trait 定义
//!
//! 定义对后端 API 源站上项目数据的抽象访问接口

use crate::models::comment::CommentWithUser;
use crate::models::page::{Page, Pager};
use crate::models::project::{Project, ProjectPreview};
use crate::ApiResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的远程访问接口，支持：
/// - 项目列表查询（分页）
/// - 项目详情查询
/// - 项目评论列表查询
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 查询项目列表
    ///
    /// # 参数
    /// - `pager`: 分页参数，原样转发给后端
    ///
    /// # 返回值
    /// 返回分页信封 [`Page<ProjectPreview>`]
    async fn list_projects(&self, pager: &Pager) -> ApiResult<Page<ProjectPreview>>;

    /// 根据 ID 获取项目详情
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 返回项目完整信息
    async fn get_project(&self, id: &str) -> ApiResult<Project>;

    /// 获取指定项目的评论列表
    ///
    /// # 参数
    /// - `project_id`: 项目 ID
    ///
    /// # 返回值
    /// 返回带用户信息的评论列表
    async fn list_comments(&self, project_id: &str) -> ApiResult<Vec<CommentWithUser>>;
}
