// ==========================================
// 价格目录导入系统 - API 层
// ==========================================
// 职责: 提供边界接口,供 HTTP 层或命令行调用
// 说明: 鉴权与按用户加价不在本层
// ==========================================

pub mod catalog_api;
pub mod error;
pub mod import_api;
pub mod settings_api;

// 重导出核心类型
pub use catalog_api::CatalogApi;
pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, ImportApiResponse};
pub use settings_api::SettingsApi;
