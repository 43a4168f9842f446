//! 分页数据模型
//!
//! 游标语义（after/before 具体怎么翻页）由后端决定，这一层只负责透传
//! 查询参数和解析返回的分页信封。

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 分页查询参数，原样转发给后端 API
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct Pager {
    /// 返回指定条目之后的数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// 返回指定条目之前的数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// 每页条数
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 50))]
    pub items: Option<i64>,
}

/// 分页信封，后端返回的列表统一包在这个结构里
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_previous: bool,
    pub has_next: bool,
}
