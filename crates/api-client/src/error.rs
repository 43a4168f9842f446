use thiserror::Error;

/// 远程访问错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// reqwest 错误（网络传输失败、响应体解析失败等）
    #[error("远程请求错误: {0}")]
    Request(#[from] reqwest::Error),

    /// 资源不存在（上游返回404）
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 上游返回了其他非 2xx 状态码
    #[error("上游服务返回异常状态码 {status}: {url}")]
    UpstreamStatus { url: String, status: u16 },

    /// 连接初始化错误
    #[error("连接初始化错误: {0}")]
    ConnectionError(String),
}

impl ApiError {
    /// 创建资源不存在错误
    pub fn not_found<T: ToString>(url: T) -> Self {
        Self::NotFound(url.to_string())
    }

    /// 创建上游状态码错误
    pub fn upstream_status<T: ToString>(url: T, status: u16) -> Self {
        Self::UpstreamStatus {
            url: url.to_string(),
            status,
        }
    }

    /// 创建连接初始化错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }
}
