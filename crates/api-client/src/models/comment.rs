//! 评论数据模型

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 带用户信息的评论
///
/// 在这一层评论是只读视图，发表、修改、删除都由后端直接处理
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithUser {
    pub id: i32,
    pub user_id: String,
    /// 用户昵称，未设置时为空
    #[serde(default)]
    pub name: Option<String>,
    pub is_admin: bool,
    pub message: String,
    pub date_posted: DateTime<Utc>,
}
