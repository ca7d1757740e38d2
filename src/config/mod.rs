// ==========================================
// 价格目录导入系统 - 配置层
// ==========================================
// 职责: 安装路径、工作表布局、汇率设置读取
// 存储: 可选的 JSON 配置文件 + settings.json
// ==========================================

pub mod catalog_config;
pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置类型
pub use catalog_config::{get_default_data_dir, CatalogConfig, SheetLayout, DATA_DIR_ENV};
pub use config_manager::ConfigManager;
pub use import_config_trait::ImportConfigReader;
