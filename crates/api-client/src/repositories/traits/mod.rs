//! 仓库 trait 定义模块

pub mod content;
pub mod project;

pub use content::ContentRepositoryTrait;
pub use project::ProjectRepositoryTrait;
