// ==========================================
// 价格目录导入系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供平面 JSON 文件访问,屏蔽文件细节
// 约束: 无锁、无事务; 目录文件整体替换
// ==========================================

pub mod catalog_repo;
pub mod error;
pub mod settings_repo;

// 重导出核心仓储
pub use catalog_repo::{CatalogRepository, JsonCatalogRepository};
pub use error::{RepositoryError, RepositoryResult};
pub use settings_repo::SettingsRepository;
