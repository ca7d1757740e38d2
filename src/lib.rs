// ==========================================
// 价格目录导入系统 - 核心库
// ==========================================
// 职责: 表格价格导入、税率与汇率归一化、目录落盘
// 系统定位: 单用户管理操作触发,一次只运行一个导入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 平面文件访问
pub mod repository;

// 导入层 - 工作簿 → 目录
pub mod importer;

// 配置层 - 路径、工作表布局、汇率设置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 边界接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CatalogImportResult, CellValue, CurrencyTier, ExchangeSettings, ImportReport, ImportWarning,
    MasterRecord, ProductRecord, SheetReport, WarningKind,
};

// 导入
pub use importer::{CatalogBuilder, CatalogImporter, ImportError, InMemoryWorkbook};

// API
pub use api::{CatalogApi, ImportApi, SettingsApi};

// 配置
pub use config::{CatalogConfig, SheetLayout};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "价格目录导入系统";
