// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 内存工作簿构造、固定配置、临时数据目录
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use price_catalog::config::{CatalogConfig, ImportConfigReader, SheetLayout};
use price_catalog::domain::{CellValue, ExchangeSettings};
use price_catalog::importer::{ImportResult, InMemoryWorkbook, WorkbookParser, WorkbookSource};
use std::path::Path;
use tempfile::TempDir;

/// 文本行 → 单元格行（空字符串为空单元格）
pub fn row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

/// 默认主数据表 + 指定顺序的价格表
pub fn layout(price_sheets: &[&str]) -> SheetLayout {
    SheetLayout {
        master_sheet: "SB1".to_string(),
        price_sheets: price_sheets.iter().map(|s| s.to_string()).collect(),
    }
}

/// 创建临时数据目录及对应配置
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - CatalogConfig: 指向该目录的配置
pub fn create_test_data_dir() -> (TempDir, CatalogConfig) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = CatalogConfig::with_data_dir(dir.path());
    (dir, config)
}

// ==========================================
// 固定返回同一内存工作簿的解析器
// ==========================================
pub struct StaticWorkbookParser(pub InMemoryWorkbook);

impl WorkbookParser for StaticWorkbookParser {
    fn open(&self, _file_path: &Path) -> ImportResult<Box<dyn WorkbookSource>> {
        Ok(Box::new(self.0.clone()))
    }
}

// ==========================================
// 固定配置
// ==========================================
pub struct MockConfig {
    pub layout: SheetLayout,
    pub settings: ExchangeSettings,
}

impl MockConfig {
    pub fn new(settings: ExchangeSettings) -> Self {
        Self {
            layout: SheetLayout::default(),
            settings,
        }
    }
}

#[async_trait]
impl ImportConfigReader for MockConfig {
    fn sheet_layout(&self) -> SheetLayout {
        self.layout.clone()
    }

    async fn get_exchange_settings(&self) -> ImportResult<ExchangeSettings> {
        Ok(self.settings)
    }
}

/// 典型的三表工作簿
///
/// - SB1: A1(501), A2(503), X1(无税类)
/// - 001: 带币种列; A1 本币, X1 美元
/// - ListaCorte: 无币种列,只有 Final; A2 与 X1
pub fn sample_workbook() -> InMemoryWorkbook {
    InMemoryWorkbook::new()
        .with_sheet(
            "SB1",
            vec![
                row(&["Codigo", "Descripcion", "TES"]),
                row(&["A1", "Tornillo 6mm", "501"]),
                row(&["A2", "Tuerca 6mm", "503"]),
                row(&["X1", "Bomba importada", ""]),
            ],
        )
        .with_sheet(
            "001",
            vec![
                row(&[
                    "Cod.Producto",
                    "Descripcion",
                    "Grupo",
                    "Precio Venta",
                    "Final",
                    "TES",
                    "Moneda",
                ]),
                row(&["A1", "desc fila", "FERR", "100", "", "", "ARS"]),
                row(&["X1", "", "IMP", "10", "", "", "USD"]),
                row(&["undefined", "Nada", "", "50", "", "", ""]),
                row(&["", "Sin codigo", "", "50", "", "", ""]),
                row(&["Z9", "Sin precio", "", "", "", "", ""]),
            ],
        )
        .with_sheet(
            "ListaCorte",
            vec![
                row(&["Cod.Producto", "Descripcion", "Grupo", "Final"]),
                row(&["A2", "", "CORTE", "$1.258,40"]),
                row(&["X1", "", "CORTE", "1258,4"]),
            ],
        )
}
