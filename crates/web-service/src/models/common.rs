use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 分页查询信息
///
/// 游标语义由后端决定，这里只做边界校验然后原样转发
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 返回指定条目之后的数据
    pub after: Option<String>,

    /// 返回指定条目之前的数据
    pub before: Option<String>,

    /// 分页查询的每页大小
    #[param(example = 20)]
    #[validate(range(min = 1, max = 50))]
    pub items: Option<i64>,
}

impl From<PageQuery> for api_client::Pager {
    fn from(value: PageQuery) -> Self {
        Self {
            after: value.after,
            before: value.before,
            items: value.items,
        }
    }
}

/// 分页信封，列表类数据统一包在这个结构里返回
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,

    /// 是否存在上一页
    pub has_previous: bool,

    /// 是否存在下一页
    pub has_next: bool,
}

impl<T, U> From<api_client::Page<U>> for Page<T>
where
    T: From<U>,
{
    fn from(value: api_client::Page<U>) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            has_previous: value.has_previous,
            has_next: value.has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_bounds() {
        let query = PageQuery {
            items: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = PageQuery {
            items: Some(20),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::<String> {
            items: vec![],
            has_previous: false,
            has_next: true,
        };
        let value = serde_json::to_value(&page).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("items"));
        assert!(object.contains_key("hasPrevious"));
        assert!(object.contains_key("hasNext"));
        assert!(!object.contains_key("has_previous"));
    }
}
