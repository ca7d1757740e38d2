// ==========================================
// 价格目录导入系统 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::catalog_config::SheetLayout;
use crate::domain::settings::ExchangeSettings;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的配置读取接口
// 实现者: ConfigManager（CatalogConfig + settings.json）
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    /// 获取工作表布局（主数据表 + 有序价格表）
    fn sheet_layout(&self) -> SheetLayout;

    /// 获取汇率设置
    ///
    /// # 默认值
    /// - 文件不存在或无法读取时: usd_billete = 1, usd_divisa = 1
    async fn get_exchange_settings(&self) -> ImportResult<ExchangeSettings>;
}
