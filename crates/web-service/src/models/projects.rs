//! 项目相关的返回对象
//!
//! 与 `api_client` 里的线上模型一一对应，这里多挂了 [`ToSchema`]
//! 用于生成 OpenAPI 文档，字段在返回时保持 camelCase

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// 项目摘要信息，列表页使用
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPreview {
    pub id: String,
    pub name: String,
    /// 列表页展示的简介文字
    pub preview: String,
    pub thumbnail_id: String,
    pub date_posted: DateTime<Utc>,
}

impl From<api_client::ProjectPreview> for ProjectPreview {
    fn from(value: api_client::ProjectPreview) -> Self {
        Self {
            id: value.id,
            name: value.name,
            preview: value.preview,
            thumbnail_id: value.thumbnail_id,
            date_posted: value.date_posted,
        }
    }
}

/// 项目完整信息，详情页使用
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub thumbnail_id: String,
    /// 项目的外部链接，可能为空
    pub project_url: Option<String>,
    pub date_posted: DateTime<Utc>,
}

impl From<api_client::Project> for Project {
    fn from(value: api_client::Project) -> Self {
        Self {
            id: value.id,
            name: value.name,
            thumbnail_id: value.thumbnail_id,
            project_url: value.project_url,
            date_posted: value.date_posted,
        }
    }
}

/// 带用户信息的评论
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub user_id: String,
    /// 用户昵称，未设置时为空
    pub name: Option<String>,
    pub is_admin: bool,
    pub message: String,
    pub date_posted: DateTime<Utc>,
}

impl From<api_client::CommentWithUser> for Comment {
    fn from(value: api_client::CommentWithUser) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            is_admin: value.is_admin,
            message: value.message,
            date_posted: value.date_posted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_serializes_camel_case() {
        let comment = Comment {
            id: 1,
            user_id: "auth0|abc".to_string(),
            name: None,
            is_admin: false,
            message: "hello".to_string(),
            date_posted: "2024-05-01T12:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&comment).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("userId"));
        assert!(object.contains_key("isAdmin"));
        assert!(object.contains_key("datePosted"));
    }
}
