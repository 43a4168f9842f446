//! 项目数据模型
//!
//! 项目在不同页面有两种视图：列表页用的摘要视图和详情页用的完整视图

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 项目摘要信息，用于列表页
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPreview {
    pub id: String,
    pub name: String,
    /// 列表页展示的简介文字
    pub preview: String,
    pub thumbnail_id: String,
    pub date_posted: DateTime<Utc>,
}

/// 项目完整信息，用于详情页
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub thumbnail_id: String,
    /// 项目的外部链接，可能为空
    #[serde(default)]
    pub project_url: Option<String>,
    pub date_posted: DateTime<Utc>,
}
