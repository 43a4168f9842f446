//! 内容仓库
//!
//! 负责静态桶源站上 markdown 文档的读取

use crate::connection::ApiConnection;
use crate::ApiResult;
use crate::repositories::traits::ContentRepositoryTrait;
use tracing::debug;

/// 内容仓库结构体
#[derive(Debug, Clone)]
pub struct ContentRepository {
    conn: ApiConnection,
}

impl ContentRepository {
    /// 创建新的内容仓库实例
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }

    /// 从桶上读取一个文本文档
    async fn fetch_text(&self, path: &str) -> ApiResult<String> {
        let url = self.conn.bucket_url(path);
        debug!("📄 读取文档 - {}", url);

        let response = self.conn.http().get(&url).send().await?;
        let text = ApiConnection::ensure_success(&url, response)?
            .text()
            .await?;

        debug!("✅ 文档读取成功 - {} 字节", text.len());
        Ok(text)
    }
}

/// 列表页介绍文档路径
fn about_path() -> String {
    "/system/projects.md".to_string()
}

/// 项目内容文档路径
fn content_path(project_id: &str) -> String {
    format!("/content/{project_id}.md")
}

#[async_trait::async_trait]
impl ContentRepositoryTrait for ContentRepository {
    /// 获取项目列表页顶部的介绍文档
    ///
    /// 请求 `GET {bucket}/system/projects.md`
    async fn about_markdown(&self) -> ApiResult<String> {
        self.fetch_text(&about_path()).await
    }

    /// 获取指定项目的内容文档
    ///
    /// 请求 `GET {bucket}/content/{id}.md`
    async fn project_markdown(&self, project_id: &str) -> ApiResult<String> {
        self.fetch_text(&content_path(project_id)).await
    }
}
