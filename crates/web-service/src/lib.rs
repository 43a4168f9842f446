//! Web服务模块
//!
//! 提供页面数据接口、令牌样式表和文档服务

use api_client::{
    ApiConnection, ContentRepository, ContentRepositoryTrait, ProjectRepository,
    ProjectRepositoryTrait,
};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use shared_lib::models::config::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod render;
pub mod routes;
pub mod theme;

/// 应用共享状态
pub struct AppState<PR: ProjectRepositoryTrait, CR: ContentRepositoryTrait> {
    pub project_repository: Arc<PR>,
    pub content_repository: Arc<CR>,
}

// 手写 Clone，只克隆 Arc，不要求 PR/CR 实现 Clone
impl<PR: ProjectRepositoryTrait, CR: ContentRepositoryTrait> Clone for AppState<PR, CR> {
    fn clone(&self) -> Self {
        Self {
            project_repository: Arc::clone(&self.project_repository),
            content_repository: Arc::clone(&self.content_repository),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<ProjectRepository, ContentRepository>;

/// 启动 Web 服务
pub async fn start_web_service(
    config: Arc<AppConfig>,
    conn: ApiConnection,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    // 令牌表不一致属于配置错误，必须在启动阶段暴露而不是等到页面渲染
    theme::validate().map_err(|issues| eyre!("设计令牌表不一致: {issues:?}"))?;

    let shared_state = AppState {
        project_repository: Arc::new(ProjectRepository::new(conn.clone())),
        content_repository: Arc::new(ContentRepository::new(conn)),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx
                .changed()
                .await
                .expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
