//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 页面数据路由通过 `utoipa` 生成 OpenAPI 文档，用户可通过 `/docs`
//! 在线查看；令牌样式表和健康检查是普通路由，不进文档。

use crate::routes::pages::__path_project_page;
use crate::routes::pages::__path_projects_page;
use crate::routes::pages::{index, project_page, projects_page};
use crate::routes::theme::theme_css;
use crate::AppState;
use api_client::{ContentRepositoryTrait, ProjectRepositoryTrait};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod pages;
pub mod theme;

/// 导出页面数据路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放两个远程仓库实例。
fn routers<PR, CR>(state: AppState<PR, CR>) -> OpenApiRouter
where
    PR: ProjectRepositoryTrait,
    CR: ContentRepositoryTrait,
{
    OpenApiRouter::new()
        .routes(routes!(projects_page))
        .routes(routes!(project_page))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 页面路由直接挂在根路径下，和站点的页面路径保持一致。
pub fn create_app_router<PR, CR>(shared_state: AppState<PR, CR>) -> Router
where
    PR: ProjectRepositoryTrait,
    CR: ContentRepositoryTrait,
{
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "portfolio-frontend", description = r#"
作品集站点的页面数据服务，覆盖场景：

- 项目列表页与详情页的数据聚合
- markdown 文档渲染
- 设计令牌样式表下发
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    router
        .route("/", get(index))
        .route("/theme.css", get(theme_css))
        .route("/health", get(health_check))
        // 合并文档路由，用户可通过 /docs 访问文档网页地址
        .merge(Scalar::with_url("/docs", api))
}

#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "web-service"
    }))
}
