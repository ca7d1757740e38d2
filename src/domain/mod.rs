// ==========================================
// 价格目录导入系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件访问逻辑,不含导入流程逻辑
// ==========================================

pub mod cell;
pub mod import;
pub mod product;
pub mod settings;
pub mod types;

// 重导出核心类型
pub use cell::CellValue;
pub use import::{
    CatalogImportResult, ImportReport, ImportWarning, ResolvedColumns, SheetHeaders, SheetReport,
};
pub use product::{MasterRecord, ProductRecord};
pub use settings::ExchangeSettings;
pub use types::{CurrencyTier, WarningKind};
