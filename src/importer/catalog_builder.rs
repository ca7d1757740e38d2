// ==========================================
// 价格目录导入系统 - 目录构建器
// ==========================================
// 流程: 主数据加载 → 按固定顺序逐表处理 → 按编码合并（后处理的表覆盖前者）
// 说明: 本模块不做任何文件写入,落盘由导入器负责
// ==========================================

use crate::config::SheetLayout;
use crate::domain::cell::CellValue;
use crate::domain::import::{ImportReport, ImportWarning, ResolvedColumns, SheetReport};
use crate::domain::product::{MasterRecord, ProductRecord};
use crate::domain::settings::ExchangeSettings;
use crate::domain::types::WarningKind;
use crate::importer::catalog_importer_trait::{SheetRows, WorkbookSource};
use crate::importer::column_resolver::{master_aliases, normalize_header, price_aliases, resolve};
use crate::importer::currency_converter::{apply_exchange_rate, CurrencyMemory};
use crate::importer::error::ImportResult;
use crate::importer::price_normalizer::{
    compute_net_price, output_tax_marker, parse_price, resolve_tax_marker, round_to,
    tax_multiplier, GROSS_PRICE_DECIMALS, NET_PRICE_DECIMALS,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// 视为"无值"的字面量（上游导出残留）
const UNDEFINED_LITERAL: &str = "undefined";

static EMPTY_CELL: CellValue = CellValue::Empty;

// ==========================================
// ProductCatalog - 按编码的有序合并
// ==========================================
// 顺序: 编码首次出现的顺序; 值: 最后一次写入
#[derive(Debug, Default)]
struct ProductCatalog {
    products: Vec<ProductRecord>,
    index: HashMap<String, usize>,
}

impl ProductCatalog {
    fn upsert(&mut self, product: ProductRecord) {
        match self.index.get(&product.code) {
            Some(&pos) => self.products[pos] = product,
            None => {
                self.index.insert(product.code.clone(), self.products.len());
                self.products.push(product);
            }
        }
    }

    fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }
}

// ==========================================
// CatalogBuilder
// ==========================================
pub struct CatalogBuilder {
    layout: SheetLayout,
}

impl CatalogBuilder {
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    /// 构建价格目录
    ///
    /// # 参数
    /// - workbook: 工作簿
    /// - settings: 汇率设置（只读）
    ///
    /// # 返回
    /// - Ok(ImportReport): 商品列表 + 逐表统计 + 可恢复警告
    /// - Err: 工作表存在但无法读取
    pub fn build(
        &self,
        workbook: &mut dyn WorkbookSource,
        settings: &ExchangeSettings,
    ) -> ImportResult<ImportReport> {
        let mut warnings = Vec::new();

        // === 步骤 1: 主数据 ===
        let master = match workbook.sheet_rows(&self.layout.master_sheet)? {
            Some(rows) => load_master_records(&self.layout.master_sheet, &rows, &mut warnings),
            None => {
                warn!(sheet = %self.layout.master_sheet, "主数据工作表不存在,跳过");
                warnings.push(ImportWarning {
                    sheet: self.layout.master_sheet.clone(),
                    kind: WarningKind::MissingSheet,
                    message: "主数据工作表不存在".to_string(),
                });
                HashMap::new()
            }
        };
        info!(count = master.len(), "主数据加载完成");

        // === 步骤 2: 价格表（顺序决定覆盖关系）===
        let mut catalog = ProductCatalog::default();
        let mut currency_memory = CurrencyMemory::new();
        let mut sheets = Vec::new();

        for sheet_name in &self.layout.price_sheets {
            let Some(rows) = workbook.sheet_rows(sheet_name)? else {
                warn!(sheet = %sheet_name, "价格工作表不存在,跳过");
                warnings.push(ImportWarning {
                    sheet: sheet_name.clone(),
                    kind: WarningKind::MissingSheet,
                    message: "价格工作表不存在".to_string(),
                });
                continue;
            };

            let report = process_price_sheet(
                sheet_name,
                &rows,
                &master,
                &mut currency_memory,
                settings,
                &mut catalog,
                &mut warnings,
            );
            info!(
                sheet = %sheet_name,
                rows = report.data_rows,
                emitted = report.emitted,
                skipped_code = report.skipped_code,
                skipped_price = report.skipped_price,
                skipped_description = report.skipped_description,
                "价格工作表处理完成"
            );
            sheets.push(report);
        }

        let products = catalog.into_products();
        info!(
            products = products.len(),
            warnings = warnings.len(),
            "目录构建完成"
        );

        Ok(ImportReport {
            products,
            master_records: master.len(),
            sheets,
            warnings,
        })
    }
}

/// 从主数据工作表加载 code → MasterRecord
///
/// 同一编码只保留第一次出现的记录
pub fn load_master_records(
    sheet_name: &str,
    rows: &SheetRows,
    warnings: &mut Vec<ImportWarning>,
) -> HashMap<String, MasterRecord> {
    let mut records = HashMap::new();
    let Some(headers) = rows.first() else {
        return records;
    };

    let code_idx = resolve(headers, master_aliases::CODE);
    let desc_idx = resolve(headers, master_aliases::DESCRIPTION);
    let tax_idx = resolve(headers, master_aliases::TAX_CLASS);
    debug!(sheet = %sheet_name, ?code_idx, ?desc_idx, ?tax_idx, "主数据列索引");

    let Some(code_idx) = code_idx else {
        push_column_warning(warnings, sheet_name, "code");
        return records;
    };
    if desc_idx.is_none() {
        push_column_warning(warnings, sheet_name, "description");
    }

    for row in rows.iter().skip(1) {
        let code = cell(row, Some(code_idx)).as_text();
        if !is_valid_code(&code) {
            continue;
        }

        let description = non_blank(cell(row, desc_idx).as_text());
        let tax_class = non_blank(cell(row, tax_idx).as_text());
        if description.is_none() && tax_class.is_none() {
            continue;
        }

        records.entry(code.clone()).or_insert(MasterRecord {
            code,
            description,
            tax_class,
        });
    }

    records
}

/// 解析价格表的全部列索引
pub fn resolve_price_columns(headers: &[CellValue]) -> ResolvedColumns {
    ResolvedColumns {
        code: resolve(headers, price_aliases::CODE),
        description: resolve(headers, price_aliases::DESCRIPTION),
        stock: resolve(headers, price_aliases::STOCK),
        neto: resolve(headers, price_aliases::NETO),
        final_price: resolve(headers, price_aliases::FINAL),
        tax_class: resolve(headers, price_aliases::TAX_CLASS),
        currency: resolve(headers, price_aliases::CURRENCY),
    }
}

#[allow(clippy::too_many_arguments)]
fn process_price_sheet(
    sheet_name: &str,
    rows: &SheetRows,
    master: &HashMap<String, MasterRecord>,
    currency_memory: &mut CurrencyMemory,
    settings: &ExchangeSettings,
    catalog: &mut ProductCatalog,
    warnings: &mut Vec<ImportWarning>,
) -> SheetReport {
    let mut report = SheetReport {
        sheet: sheet_name.to_string(),
        ..SheetReport::default()
    };

    let Some(headers) = rows.first() else {
        return report;
    };

    let columns = resolve_price_columns(headers);
    report.columns = columns;
    debug!(sheet = %sheet_name, ?columns, "价格表列索引");

    if columns.code.is_none() {
        push_column_warning(warnings, sheet_name, "code");
    }
    if columns.neto.is_none() && columns.final_price.is_none() {
        push_column_warning(warnings, sheet_name, "neto");
        push_column_warning(warnings, sheet_name, "final");
    }

    for row in rows.iter().skip(1) {
        report.data_rows += 1;

        // 编码校验
        let code = cell(row, columns.code).as_text();
        if !is_valid_code(&code) {
            report.skipped_code += 1;
            continue;
        }

        // 带币种列的表写入币种记忆
        let current_marker = columns.currency.map(|_| cell(row, columns.currency).as_text());
        if let Some(marker) = &current_marker {
            currency_memory.record(&code, marker);
        }

        // 税率与净价
        let master_record = master.get(&code);
        let tax_marker = resolve_tax_marker(
            &cell(row, columns.tax_class).as_text(),
            master_record.and_then(|m| m.tax_class.as_deref()),
        );
        let multiplier = tax_multiplier(tax_marker.as_deref());

        let raw_neto = parse_price(cell(row, columns.neto));
        let raw_final = parse_price(cell(row, columns.final_price));
        let net_price = compute_net_price(raw_neto, raw_final, multiplier);
        if net_price <= 0.0 {
            report.skipped_price += 1;
            continue;
        }

        // 汇率换算必须在含税价之前
        let (net_price, currency) = apply_exchange_rate(
            net_price,
            current_marker.as_deref(),
            currency_memory.lookup(&code),
            settings,
        );
        // 汇率为 0 或负数时换算后不再为正
        if !(net_price.is_finite() && net_price > 0.0) {
            report.skipped_price += 1;
            continue;
        }
        let gross_price = net_price * multiplier;

        let description = master_record
            .and_then(|m| m.description.clone())
            .unwrap_or_else(|| cell(row, columns.description).as_text());
        if description.is_empty() || description == UNDEFINED_LITERAL {
            report.skipped_description += 1;
            continue;
        }

        catalog.upsert(ProductRecord {
            id: code.clone(),
            code,
            description,
            stock: cell(row, columns.stock).as_text(),
            price_neto: round_to(net_price, NET_PRICE_DECIMALS),
            price: round_to(gross_price, GROSS_PRICE_DECIMALS),
            tes: output_tax_marker(tax_marker.as_deref(), multiplier),
            currency,
        });
        report.emitted += 1;
    }

    report
}

fn cell(row: &[CellValue], idx: Option<usize>) -> &CellValue {
    idx.and_then(|i| row.get(i)).unwrap_or(&EMPTY_CELL)
}

/// 编码非空、非 "undefined"、且不是数据中间重复出现的表头
fn is_valid_code(code: &str) -> bool {
    if code.is_empty() || code == UNDEFINED_LITERAL {
        return false;
    }
    let normalized = normalize_header(code);
    !price_aliases::CODE
        .iter()
        .chain(master_aliases::CODE)
        .any(|alias| normalize_header(alias) == normalized)
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() || value == UNDEFINED_LITERAL {
        None
    } else {
        Some(value)
    }
}

fn push_column_warning(warnings: &mut Vec<ImportWarning>, sheet: &str, field: &str) {
    warn!(sheet = %sheet, field = %field, "表头中找不到列");
    warnings.push(ImportWarning {
        sheet: sheet.to_string(),
        kind: WarningKind::UnresolvableColumn,
        message: format!("表头中找不到字段 {} 对应的列", field),
    });
}
