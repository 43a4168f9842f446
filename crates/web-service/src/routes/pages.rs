//! 页面数据接口
//!
//! 每个页面对应一个接口，在渲染前被调用一次，把该页面需要的数据
//! 从两个源站取回并聚合成一个对象返回。
//!
//! 取数策略是固定的：一个页面的所有请求并发发出并全部等待完成，
//! 任何一个失败都会让整个页面加载失败并走统一的错误转换。

use crate::models::common::PageQuery;
use crate::models::err::AppError;
use crate::models::pages::{ProjectDetailData, ProjectsPageData};
use crate::render::markdown_to_html;
use crate::AppState;
use api_client::{ContentRepositoryTrait, Pager, ProjectRepositoryTrait};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 首页直接跳转到项目列表页
pub async fn index() -> Redirect {
    Redirect::permanent("/projects")
}

/// 项目列表页数据
///
/// 并发取回两份数据：
/// - 静态桶上的介绍文档，渲染为 HTML
/// - 后端的项目摘要分页列表，分页参数原样转发
#[utoipa::path(get,
    path = "/projects",
    tag = "pages",
    params(PageQuery),
    responses(
        (status = 200, description = "List page data", body = ProjectsPageData),
        (status = 502, description = "Upstream failure")
    ),
)]
pub async fn projects_page<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ProjectsPageData>, AppError>
where
    PR: ProjectRepositoryTrait,
    CR: ContentRepositoryTrait,
{
    debug!("📃 加载项目列表页 {:?}", query);

    // 验证输入参数，确保有效性
    query.validate()?;
    let pager = Pager::from(query);

    let (about_markdown, projects) = futures::try_join!(
        state.content_repository.about_markdown(),
        state.project_repository.list_projects(&pager),
    )?;

    Ok(Json(ProjectsPageData {
        about: markdown_to_html(&about_markdown),
        projects: projects.into(),
    }))
}

/// 项目详情页数据
///
/// 并发取回三份数据：项目记录、项目内容文档（渲染为 HTML）、评论列表。
/// 项目不存在时返回404。
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "pages",
    params(
        ("id" = String, Path, description = "项目 ID")
    ),
    responses(
        (status = 200, description = "Detail page data", body = ProjectDetailData),
        (status = 404, description = "Unknown project"),
        (status = 502, description = "Upstream failure")
    ),
)]
pub async fn project_page<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetailData>, AppError>
where
    PR: ProjectRepositoryTrait,
    CR: ContentRepositoryTrait,
{
    debug!("📃 加载项目详情页 {}", id);

    let (project, content_markdown, comments) = futures::try_join!(
        state.project_repository.get_project(&id),
        state.content_repository.project_markdown(&id),
        state.project_repository.list_comments(&id),
    )?;

    Ok(Json(ProjectDetailData {
        project: project.into(),
        content: markdown_to_html(&content_markdown),
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::{ApiError, ApiResult, CommentWithUser, Page, Project, ProjectPreview};
    use axum::response::IntoResponse;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    fn date() -> DateTime<Utc> {
        "2024-05-01T12:00:00Z".parse().unwrap()
    }

    struct StubProjects;

    #[async_trait::async_trait]
    impl ProjectRepositoryTrait for StubProjects {
        async fn list_projects(&self, pager: &Pager) -> ApiResult<Page<ProjectPreview>> {
            assert_eq!(pager.items, Some(20));
            Ok(Page {
                items: vec![ProjectPreview {
                    id: "my-project".to_string(),
                    name: "My Project".to_string(),
                    preview: "A short description".to_string(),
                    thumbnail_id: "thumb-1".to_string(),
                    date_posted: date(),
                }],
                has_previous: false,
                has_next: true,
            })
        }

        async fn get_project(&self, id: &str) -> ApiResult<Project> {
            Ok(Project {
                id: id.to_string(),
                name: "My Project".to_string(),
                thumbnail_id: "thumb-1".to_string(),
                project_url: None,
                date_posted: date(),
            })
        }

        async fn list_comments(&self, _project_id: &str) -> ApiResult<Vec<CommentWithUser>> {
            Ok(vec![CommentWithUser {
                id: 1,
                user_id: "auth0|abc".to_string(),
                name: Some("Alice".to_string()),
                is_admin: false,
                message: "Nice project!".to_string(),
                date_posted: date(),
            }])
        }
    }

    struct StubContent;

    #[async_trait::async_trait]
    impl ContentRepositoryTrait for StubContent {
        async fn about_markdown(&self) -> ApiResult<String> {
            Ok("# Projects".to_string())
        }

        async fn project_markdown(&self, _project_id: &str) -> ApiResult<String> {
            Ok("Some *content*".to_string())
        }
    }

    /// 项目仓库整体不可用
    struct BrokenProjects;

    #[async_trait::async_trait]
    impl ProjectRepositoryTrait for BrokenProjects {
        async fn list_projects(&self, _pager: &Pager) -> ApiResult<Page<ProjectPreview>> {
            Err(ApiError::upstream_status("https://api.example.com/projects", 500))
        }

        async fn get_project(&self, id: &str) -> ApiResult<Project> {
            Err(ApiError::not_found(format!(
                "https://api.example.com/projects/{id}"
            )))
        }

        async fn list_comments(&self, _project_id: &str) -> ApiResult<Vec<CommentWithUser>> {
            Err(ApiError::upstream_status(
                "https://api.example.com/projects/x/comments",
                500,
            ))
        }
    }

    fn stub_state() -> AppState<StubProjects, StubContent> {
        AppState {
            project_repository: Arc::new(StubProjects),
            content_repository: Arc::new(StubContent),
        }
    }

    #[tokio::test]
    async fn test_projects_page_bundles_all_data() {
        let query = PageQuery {
            items: Some(20),
            ..Default::default()
        };
        let Json(data) = projects_page(State(stub_state()), Query(query))
            .await
            .unwrap();

        assert_eq!(data.about, "<h1>Projects</h1>\n");
        assert_eq!(data.projects.items.len(), 1);
        assert!(data.projects.has_next);
    }

    #[tokio::test]
    async fn test_projects_page_shape() {
        let query = PageQuery {
            items: Some(20),
            ..Default::default()
        };
        let Json(data) = projects_page(State(stub_state()), Query(query))
            .await
            .unwrap();
        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("about"));
        assert!(object.contains_key("projects"));
        assert!(value["projects"]["items"][0]
            .as_object()
            .unwrap()
            .contains_key("thumbnailId"));
    }

    #[tokio::test]
    async fn test_projects_page_rejects_invalid_pager() {
        let query = PageQuery {
            items: Some(0),
            ..Default::default()
        };
        let result = projects_page(State(stub_state()), Query(query)).await;

        let error = result.err().unwrap();
        assert!(matches!(error, AppError::ValidationFailed(_)));
        assert_eq!(
            error.into_response().status(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_project_page_bundles_all_data() {
        let Json(data) = project_page(State(stub_state()), Path("my-project".to_string()))
            .await
            .unwrap();

        assert_eq!(data.project.id, "my-project");
        assert_eq!(data.content, "<p>Some <em>content</em></p>\n");
        assert_eq!(data.comments.len(), 1);
    }

    #[tokio::test]
    async fn test_project_page_shape() {
        let Json(data) = project_page(State(stub_state()), Path("my-project".to_string()))
            .await
            .unwrap();
        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("project"));
        assert!(object.contains_key("content"));
        assert!(object.contains_key("comments"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_propagated() {
        // 上游失败必须原样上抛，不能吞掉换成空页面
        let state = AppState {
            project_repository: Arc::new(BrokenProjects),
            content_repository: Arc::new(StubContent),
        };
        let result = projects_page(State(state), Query(PageQuery::default())).await;

        let error = result.err().unwrap();
        assert!(matches!(
            error,
            AppError::ApiError(ApiError::UpstreamStatus { .. })
        ));
        assert_eq!(
            error.into_response().status(),
            axum::http::StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_unknown_project_maps_to_not_found() {
        let state = AppState {
            project_repository: Arc::new(BrokenProjects),
            content_repository: Arc::new(StubContent),
        };
        let result = project_page(State(state), Path("missing".to_string())).await;

        let error = result.err().unwrap();
        assert_eq!(
            error.into_response().status(),
            axum::http::StatusCode::NOT_FOUND
        );
    }
}
