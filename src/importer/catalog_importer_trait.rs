// ==========================================
// 价格目录导入系统 - 导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::import::CatalogImportResult;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

/// 一个工作表的全部行（第一行为表头）
pub type SheetRows = Vec<Vec<CellValue>>;

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录导入主接口（"执行导入"）
// 实现者: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// 从工作簿导入价格目录并落盘
    ///
    /// # 参数
    /// - file_path: 工作簿路径（.xlsx/.xls/.ods/.csv 等）
    ///
    /// # 返回
    /// - Ok(CatalogImportResult): 批次信息 + 构建报告
    /// - Err: 工作簿无法打开、目录写入失败等（此时旧目录文件保持不变）
    ///
    /// # 导入流程
    /// 1. 读取汇率设置
    /// 2. 打开工作簿
    /// 3. 加载主数据 → 逐表处理价格 → 按编码合并
    /// 4. 原子写入目录文件
    async fn import_from_workbook<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<CatalogImportResult>;
}

// ==========================================
// WorkbookSource Trait
// ==========================================
// 用途: 按名称读取工作表的原始行
// 实现者: CalamineWorkbook, CsvWorkbook, InMemoryWorkbook
pub trait WorkbookSource: Send {
    /// 工作簿内的工作表名称（按文件顺序）
    fn sheet_names(&self) -> Vec<String>;

    /// 读取工作表的全部行
    ///
    /// # 返回
    /// - Ok(Some(rows)): 工作表存在
    /// - Ok(None): 工作表不存在
    /// - Err: 工作表存在但无法读取
    fn sheet_rows(&mut self, sheet_name: &str) -> ImportResult<Option<SheetRows>>;
}

// ==========================================
// WorkbookParser Trait
// ==========================================
// 用途: 文件路径 → 工作簿
// 实现者: UniversalWorkbookLoader
pub trait WorkbookParser: Send + Sync {
    fn open(&self, file_path: &Path) -> ImportResult<Box<dyn WorkbookSource>>;
}
