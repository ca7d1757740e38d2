// ==========================================
// 价格目录导入系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{CatalogApi, ImportApi, SettingsApi};
use crate::config::CatalogConfig;
use crate::importer::WorkbookParser;
use crate::repository::{JsonCatalogRepository, SettingsRepository};

/// 应用状态
///
/// 包含所有API实例和安装配置
pub struct AppState {
    /// 安装配置
    pub config: CatalogConfig,

    /// 价格导入API
    pub import_api: Arc<ImportApi>,

    /// 汇率设置API
    pub settings_api: Arc<SettingsApi>,

    /// 目录查询API
    pub catalog_api: Arc<CatalogApi>,
}

impl AppState {
    /// 按配置创建AppState
    pub fn new(config: CatalogConfig) -> Self {
        tracing::info!(data_dir = %config.data_dir.display(), "初始化AppState");
        let import_api = ImportApi::new(config.clone());
        Self::assemble(config, import_api)
    }

    /// 使用指定工作簿解析器创建AppState
    pub fn with_parser(config: CatalogConfig, workbook_parser: Box<dyn WorkbookParser>) -> Self {
        let import_api = ImportApi::with_parser(config.clone(), workbook_parser);
        Self::assemble(config, import_api)
    }

    fn assemble(config: CatalogConfig, import_api: ImportApi) -> Self {
        let settings_api = SettingsApi::new(SettingsRepository::new(config.settings_path()));
        let catalog_api = CatalogApi::new(JsonCatalogRepository::new(config.catalog_path()));

        Self {
            config,
            import_api: Arc::new(import_api),
            settings_api: Arc::new(settings_api),
            catalog_api: Arc::new(catalog_api),
        }
    }
}
