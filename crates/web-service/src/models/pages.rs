//! 页面数据返回对象
//!
//! 每个页面路由返回一个聚合对象，把该页面需要的全部数据一次性带回，
//! 渲染层拿到后不需要再发起任何请求

use crate::models::common::Page;
use crate::models::projects::{Comment, Project, ProjectPreview};
use serde::Serialize;
use utoipa::ToSchema;

/// 项目列表页数据
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPageData {
    /// 页面顶部的介绍文档，已渲染为 HTML
    pub about: String,

    /// 项目摘要分页列表
    pub projects: Page<ProjectPreview>,
}

/// 项目详情页数据
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailData {
    pub project: Project,

    /// 项目内容文档，已渲染为 HTML
    pub content: String,

    pub comments: Vec<Comment>,
}
