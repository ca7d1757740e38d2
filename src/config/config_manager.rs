// ==========================================
// 价格目录导入系统 - 配置管理器
// ==========================================
// 职责: 组合安装配置与汇率设置,供导入器读取
// ==========================================

use crate::config::catalog_config::{CatalogConfig, SheetLayout};
use crate::config::import_config_trait::ImportConfigReader;
use crate::domain::settings::ExchangeSettings;
use crate::importer::error::ImportResult;
use crate::repository::SettingsRepository;
use async_trait::async_trait;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: CatalogConfig,
    settings_repo: SettingsRepository,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    pub fn new(config: CatalogConfig) -> Self {
        let settings_repo = SettingsRepository::new(config.settings_path());
        Self {
            config,
            settings_repo,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn settings_repo(&self) -> &SettingsRepository {
        &self.settings_repo
    }
}

#[async_trait]
impl ImportConfigReader for ConfigManager {
    fn sheet_layout(&self) -> SheetLayout {
        self.config.layout.clone()
    }

    async fn get_exchange_settings(&self) -> ImportResult<ExchangeSettings> {
        Ok(self.settings_repo.load())
    }
}
