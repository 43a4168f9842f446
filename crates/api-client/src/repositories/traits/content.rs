//! 内容仓库 trait 定义
//!
//! 定义对静态桶源站上 markdown 文档的抽象访问接口

use crate::ApiResult;

/// 内容仓库trait定义
///
/// 静态桶上的文档都是原始 markdown 文本，渲染成 HTML 是展示层的事情
#[async_trait::async_trait]
pub trait ContentRepositoryTrait: Send + Sync + 'static {
    /// 获取项目列表页顶部的介绍文档
    async fn about_markdown(&self) -> ApiResult<String>;

    /// 获取指定项目的内容文档
    ///
    /// # 参数
    /// - `project_id`: 项目 ID，文档按 `{id}.md` 命名
    async fn project_markdown(&self, project_id: &str) -> ApiResult<String>;
}
