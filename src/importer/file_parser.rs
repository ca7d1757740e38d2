// ==========================================
// 价格目录导入系统 - 工作簿解析器实现
// ==========================================
// 支持: Excel/ODS (calamine) / CSV (单表,表名取文件名)
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::import::SheetHeaders;
use crate::importer::catalog_importer_trait::{SheetRows, WorkbookParser, WorkbookSource};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

// ==========================================
// Calamine 工作簿
// ==========================================
pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    pub fn open(path: &Path) -> ImportResult<Self> {
        let sheets = open_workbook_auto(path)
            .map_err(|e| ImportError::WorkbookOpenError(format!("{}: {}", path.display(), e)))?;
        Ok(Self { sheets })
    }
}

impl WorkbookSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn sheet_rows(&mut self, sheet_name: &str) -> ImportResult<Option<SheetRows>> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Ok(None);
        }

        let range = self
            .sheets
            .worksheet_range(sheet_name)
            .map_err(|e| ImportError::SheetReadError {
                sheet: sheet_name.to_string(),
                message: e.to_string(),
            })?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect();

        Ok(Some(rows))
    }
}

// ==========================================
// CSV 工作簿（单表）
// ==========================================
pub struct CsvWorkbook {
    sheet_name: String,
    rows: SheetRows,
}

impl CsvWorkbook {
    pub fn open(path: &Path) -> ImportResult<Self> {
        let sheet_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet1")
            .to_string();

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 按字节读取; 非 UTF-8 字段（如 Windows-1252 导出）逐格有损解码
        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            rows.push(
                record
                    .iter()
                    .map(|field| CellValue::from(String::from_utf8_lossy(field).as_ref()))
                    .collect(),
            );
        }

        Ok(Self { sheet_name, rows })
    }
}

impl WorkbookSource for CsvWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        vec![self.sheet_name.clone()]
    }

    fn sheet_rows(&mut self, sheet_name: &str) -> ImportResult<Option<SheetRows>> {
        if sheet_name == self.sheet_name {
            Ok(Some(self.rows.clone()))
        } else {
            Ok(None)
        }
    }
}

// ==========================================
// 内存工作簿
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: Vec<(String, SheetRows)>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个工作表（同名表覆盖）
    pub fn with_sheet(mut self, name: &str, rows: SheetRows) -> Self {
        self.sheets.retain(|(existing, _)| existing != name);
        self.sheets.push((name.to_string(), rows));
        self
    }
}

impl WorkbookSource for InMemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn sheet_rows(&mut self, sheet_name: &str) -> ImportResult<Option<SheetRows>> {
        Ok(self
            .sheets
            .iter()
            .find(|(name, _)| name == sheet_name)
            .map(|(_, rows)| rows.clone()))
    }
}

// ==========================================
// 通用工作簿加载器（根据扩展名自动选择）
// ==========================================
pub struct UniversalWorkbookLoader;

impl WorkbookParser for UniversalWorkbookLoader {
    fn open(&self, file_path: &Path) -> ImportResult<Box<dyn WorkbookSource>> {
        if !file_path.exists() {
            return Err(ImportError::WorkbookNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        debug!(path = %file_path.display(), ext = %ext, "打开工作簿");

        match ext.as_str() {
            "csv" => Ok(Box::new(CsvWorkbook::open(file_path)?)),
            e if SPREADSHEET_EXTENSIONS.contains(&e) => {
                Ok(Box::new(CalamineWorkbook::open(file_path)?))
            }
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

/// 列出每个工作表的表头行（跳过空表）
pub fn inspect_headers(workbook: &mut dyn WorkbookSource) -> ImportResult<Vec<SheetHeaders>> {
    let mut result = Vec::new();

    for sheet in workbook.sheet_names() {
        let Some(rows) = workbook.sheet_rows(&sheet)? else {
            continue;
        };
        let Some(header_row) = rows.first() else {
            continue;
        };

        result.push(SheetHeaders {
            sheet,
            headers: header_row.iter().map(CellValue::as_text).collect(),
        });
    }

    Ok(result)
}
