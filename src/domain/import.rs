// ==========================================
// 价格目录导入系统 - 导入结果模型
// ==========================================
// 用途: 导入接口返回值、逐表统计、可恢复警告
// ==========================================

use crate::domain::product::ProductRecord;
use crate::domain::types::WarningKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ResolvedColumns - 价格表列索引
// ==========================================
// None 表示表头中未找到该列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedColumns {
    pub code: Option<usize>,
    pub description: Option<usize>,
    pub stock: Option<usize>,
    pub neto: Option<usize>,
    pub final_price: Option<usize>,
    pub tax_class: Option<usize>,
    pub currency: Option<usize>,
}

// ==========================================
// ImportWarning - 可恢复警告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportWarning {
    pub sheet: String,
    pub kind: WarningKind,
    pub message: String,
}

// ==========================================
// SheetReport - 单表统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetReport {
    pub sheet: String,
    pub data_rows: usize,           // 数据行数（不含表头）
    pub emitted: usize,             // 写入/覆盖的商品数
    pub skipped_code: usize,        // 编码为空/undefined/表头残留
    pub skipped_price: usize,       // 价格无法解析或为 0
    pub skipped_description: usize, // 描述为空/undefined
    pub columns: ResolvedColumns,
}

// ==========================================
// ImportReport - 一次构建的完整结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub products: Vec<ProductRecord>,  // 按首次出现顺序,值为最后一次覆盖
    pub master_records: usize,         // 加载的主数据条数
    pub sheets: Vec<SheetReport>,
    pub warnings: Vec<ImportWarning>,
}

// ==========================================
// CatalogImportResult - 导入接口返回值
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogImportResult {
    pub batch_id: String,             // 批次 ID（UUID）
    pub file_name: Option<String>,    // 源文件名
    pub imported_at: DateTime<Utc>,   // 完成时间
    pub count: usize,                 // 目录中的商品数
    pub elapsed_ms: i64,              // 导入耗时（毫秒）
    pub report: ImportReport,
}

// ==========================================
// SheetHeaders - 表头巡检结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetHeaders {
    pub sheet: String,
    pub headers: Vec<String>,
}
