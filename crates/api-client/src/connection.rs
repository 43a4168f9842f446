use crate::{ApiError, ApiResult};
use shared_lib::models::config::AppConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 远程源站连接
///
/// 内部持有一个 [`reqwest::Client`]，client 本身带连接池并且可以 `.clone()`
/// 安全跨线程使用，所以这个结构体整体也按值克隆传递。
#[derive(Debug, Clone)]
pub struct ApiConnection {
    http: reqwest::Client,
    api_base: String,
    bucket_base: String,
}

impl ApiConnection {
    /// 拼接 API 源站上的路径，`path` 必须以 `/` 开头
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// 拼接静态桶源站上的路径，`path` 必须以 `/` 开头
    pub fn bucket_url(&self, path: &str) -> String {
        format!("{}{}", self.bucket_base, path)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// 检查响应状态码
    ///
    /// 404 被单独区分出来，方便上层转换为"页面不存在"；其余非 2xx
    /// 状态一律视为上游错误，带上请求地址方便排查。
    pub fn ensure_success(url: &str, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(url));
        }
        if !status.is_success() {
            return Err(ApiError::upstream_status(url, status.as_u16()));
        }
        Ok(response)
    }
}

/// 创建远程源站连接（一站式函数）
pub fn initialize_client(config: Arc<AppConfig>) -> ApiResult<ApiConnection> {
    // 创建http client
    // 使用默认连接池配置，如果有调整需要可参考reqwest文档
    let http = reqwest::Client::builder()
        // 建连超时，源站不可达时尽快失败
        .connect_timeout(Duration::from_secs(3))
        // 单次请求整体超时，页面数据接口都是小响应
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("portfolio-frontend/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::connection(format!("创建HTTP客户端失败: {e}")))?;

    info!("🌐 HTTP客户端创建成功");

    Ok(ApiConnection {
        http,
        // 源站地址统一去掉结尾的 `/`，保证路径拼接时不会出现 `//`
        api_base: config.api_base_url.trim_end_matches('/').to_string(),
        bucket_base: config.bucket_base_url.trim_end_matches('/').to_string(),
    })
}
