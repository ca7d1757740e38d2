// ==========================================
// 价格目录导入系统 - 导入层
// ==========================================
// 职责: 工作簿 → 价格目录
// 流程: 列定位 → 价格归一化 → 汇率换算 → 按编码合并 → 落盘
// 支持: Excel/ODS, CSV
// ==========================================

// 模块声明
pub mod catalog_builder;
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod column_resolver;
pub mod currency_converter;
pub mod error;
pub mod file_parser;
pub mod price_normalizer;

// 重导出核心类型
pub use catalog_builder::CatalogBuilder;
pub use catalog_importer_impl::CatalogImporterImpl;
pub use currency_converter::CurrencyMemory;
pub use error::{ImportError, ImportResult};
pub use file_parser::{
    inspect_headers, CalamineWorkbook, CsvWorkbook, InMemoryWorkbook, UniversalWorkbookLoader,
};

// 重导出 Trait 接口
pub use catalog_importer_trait::{CatalogImporter, SheetRows, WorkbookParser, WorkbookSource};
