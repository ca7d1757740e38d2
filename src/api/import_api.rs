// ==========================================
// 价格目录导入API
// ==========================================
// 职责: 封装"执行导入"操作（调用方已完成权限校验）
// ==========================================

use crate::api::error::ApiResult;
use crate::config::{CatalogConfig, ConfigManager};
use crate::domain::import::{ImportWarning, SheetHeaders, SheetReport};
use crate::importer::{
    inspect_headers, CatalogImporter, CatalogImporterImpl, UniversalWorkbookLoader,
    WorkbookParser,
};
use crate::repository::JsonCatalogRepository;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 目录中的商品数量
    pub count: usize,
    /// 批次ID
    pub batch_id: String,
    /// 逐表统计
    pub sheets: Vec<SheetReport>,
    /// 可恢复警告（缺表/缺列）
    pub warnings: Vec<ImportWarning>,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
}

// ==========================================
// ImportApi - 价格目录导入 API
// ==========================================
pub struct ImportApi {
    importer: CatalogImporterImpl<JsonCatalogRepository, ConfigManager>,
    workbook_path: PathBuf,
}

impl ImportApi {
    /// 创建新的ImportApi实例（按扩展名选择解析器）
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_parser(config, Box::new(UniversalWorkbookLoader))
    }

    /// 使用指定解析器创建实例
    pub fn with_parser(config: CatalogConfig, workbook_parser: Box<dyn WorkbookParser>) -> Self {
        let workbook_path = config.workbook_path();
        let catalog_repo = JsonCatalogRepository::new(config.catalog_path());
        let importer =
            CatalogImporterImpl::new(catalog_repo, ConfigManager::new(config), workbook_parser);

        Self {
            importer,
            workbook_path,
        }
    }

    pub fn workbook_path(&self) -> &Path {
        &self.workbook_path
    }

    /// 从配置的工作簿执行导入
    pub async fn run_import(&self) -> ApiResult<ImportApiResponse> {
        self.run_import_from(&self.workbook_path).await
    }

    /// 从指定工作簿执行导入
    pub async fn run_import_from(&self, workbook_path: &Path) -> ApiResult<ImportApiResponse> {
        let result = self.importer.import_from_workbook(workbook_path).await?;

        Ok(ImportApiResponse {
            count: result.count,
            batch_id: result.batch_id,
            sheets: result.report.sheets,
            warnings: result.report.warnings,
            elapsed_ms: result.elapsed_ms,
        })
    }

    /// 列出工作簿各表的表头（用于排查别名不匹配）
    pub fn inspect_headers(&self, workbook_path: Option<&Path>) -> ApiResult<Vec<SheetHeaders>> {
        let path = workbook_path.unwrap_or(&self.workbook_path);
        let mut workbook = self.importer.workbook_parser().open(path)?;
        Ok(inspect_headers(&mut *workbook)?)
    }
}
