//! 项目仓库
//!
//! 负责项目相关的后端 API 访问

use crate::connection::ApiConnection;
use crate::models::comment::CommentWithUser;
use crate::models::page::{Page, Pager};
use crate::models::project::{Project, ProjectPreview};
use crate::ApiResult;
use crate::repositories::traits::ProjectRepositoryTrait;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    conn: ApiConnection,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }
}

/// 项目列表接口路径
fn projects_path() -> String {
    "/projects".to_string()
}

/// 项目详情接口路径
fn project_path(id: &str) -> String {
    format!("/projects/{id}")
}

/// 项目评论接口路径
fn comments_path(project_id: &str) -> String {
    format!("/projects/{project_id}/comments")
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 查询项目列表
    ///
    /// 请求 `GET {api}/projects`，分页参数通过查询串原样转发。
    /// 后端返回分页信封，这里不做任何游标处理。
    async fn list_projects(&self, pager: &Pager) -> ApiResult<Page<ProjectPreview>> {
        let url = self.conn.api_url(&projects_path());
        debug!("🔍 查询项目列表 - {} 分页: {:?}", url, pager);

        let response = self.conn.http().get(&url).query(pager).send().await?;
        let page = ApiConnection::ensure_success(&url, response)?
            .json::<Page<ProjectPreview>>()
            .await?;

        debug!("✅ 查询完成 - 本页 {} 个项目", page.items.len());

        Ok(page)
    }

    /// 根据 ID 获取项目详情
    ///
    /// 请求 `GET {api}/projects/{id}`，项目不存在时上游返回404，
    /// 会转换为 [`crate::ApiError::NotFound`]。
    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let url = self.conn.api_url(&project_path(id));
        debug!("🔍 获取项目详情 - {}", url);

        let response = self.conn.http().get(&url).send().await?;
        let project = ApiConnection::ensure_success(&url, response)?
            .json::<Project>()
            .await?;

        debug!("✅ 项目获取成功: {}", project.id);
        Ok(project)
    }

    /// 获取指定项目的评论列表
    ///
    /// 请求 `GET {api}/projects/{id}/comments`，返回完整列表，不分页
    async fn list_comments(&self, project_id: &str) -> ApiResult<Vec<CommentWithUser>> {
        let url = self.conn.api_url(&comments_path(project_id));
        debug!("🔍 获取项目评论 - {}", url);

        let response = self.conn.http().get(&url).send().await?;
        let comments = ApiConnection::ensure_success(&url, response)?
            .json::<Vec<CommentWithUser>>()
            .await?;

        debug!("✅ 评论获取成功 - 共 {} 条", comments.len());
        Ok(comments)
    }
}
