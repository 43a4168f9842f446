//! 🔧 共享库模块
//!
//! 这个模块包含了在多个 crate 之间共享的通用代码，目前主要是：
//! - 应用配置（API 源站地址、静态桶源站地址、监听地址）

pub mod models;

// 重新导出常用类型
pub use models::AppConfig;
