use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// 程序配置
///
/// 页面数据服务依赖两个外部源站：
/// - API 源站：提供项目列表、项目详情、评论等 JSON 接口
/// - 静态桶源站：提供 markdown 文档（关于页、项目内容页）
pub struct AppConfig {
    /// 后端 API 源站地址，例如 `https://api.example.com`
    pub api_base_url: String,

    /// 静态桶源站地址，例如 `https://bucket.example.com`
    pub bucket_base_url: String,

    /// 本服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整，默认 `0.0.0.0:8080`
    pub bind_addr: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        // 两个源站地址是必填项，缺失时直接报错并提示设置方法
        let api_base_url = std::env::var("PUBLIC_API_URL")
            .context("Can not load PUBLIC_API_URL in environment")
            .suggestion("设置 PUBLIC_API_URL 环境变量，指向后端 API 源站")?;

        let bucket_base_url = std::env::var("PUBLIC_BUCKET_URL")
            .context("Can not load PUBLIC_BUCKET_URL in environment")
            .suggestion("设置 PUBLIC_BUCKET_URL 环境变量，指向静态桶源站")?;

        let config = AppConfig {
            api_base_url,
            bucket_base_url,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        };
        Ok(Arc::new(config))
    }
}
