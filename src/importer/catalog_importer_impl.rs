// ==========================================
// 价格目录导入系统 - 目录导入器实现
// ==========================================
// 职责: 整合导入流程，从工作簿到目录文件
// 流程: 读取设置 → 打开工作簿 → 构建目录 → 原子落盘
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::import::CatalogImportResult;
use crate::importer::catalog_builder::CatalogBuilder;
use crate::importer::catalog_importer_trait::{CatalogImporter, WorkbookParser};
use crate::importer::error::{ImportError, ImportResult};
use crate::repository::CatalogRepository;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// CatalogImporterImpl - 目录导入器实现
// ==========================================
pub struct CatalogImporterImpl<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    // 目录仓储
    catalog_repo: R,

    // 配置读取器
    config: C,

    // 工作簿解析器
    workbook_parser: Box<dyn WorkbookParser>,
}

impl<R, C> CatalogImporterImpl<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    /// 创建新的 CatalogImporter 实例
    ///
    /// # 参数
    /// - catalog_repo: 目录仓储
    /// - config: 配置读取器
    /// - workbook_parser: 工作簿解析器
    pub fn new(catalog_repo: R, config: C, workbook_parser: Box<dyn WorkbookParser>) -> Self {
        Self {
            catalog_repo,
            config,
            workbook_parser,
        }
    }

    pub fn catalog_repo(&self) -> &R {
        &self.catalog_repo
    }

    pub fn workbook_parser(&self) -> &dyn WorkbookParser {
        self.workbook_parser.as_ref()
    }
}

#[async_trait::async_trait]
impl<R, C> CatalogImporter for CatalogImporterImpl<R, C>
where
    R: CatalogRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    #[instrument(skip(self, file_path), fields(batch_id))]
    async fn import_from_workbook<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<CatalogImportResult> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        let path = file_path.as_ref().to_path_buf();
        info!(batch_id = %batch_id, file_path = %path.display(), "开始导入价格目录");

        // === 步骤 1: 汇率设置 ===
        let settings = self.config.get_exchange_settings().await?;
        debug!(
            usd_billete = settings.usd_billete,
            usd_divisa = settings.usd_divisa,
            "汇率设置读取完成"
        );

        // === 步骤 2 + 3: 打开工作簿并构建目录 ===
        let report = {
            let mut workbook = self.workbook_parser.open(&path).map_err(|e| {
                error!(error = %e, "工作簿打开失败");
                e
            })?;

            let builder = CatalogBuilder::new(self.config.sheet_layout());
            builder.build(&mut *workbook, &settings).map_err(|e| {
                error!(error = %e, "目录构建失败");
                e
            })?
        };

        // === 步骤 4: 落盘（仅在构建成功后）===
        let count = self
            .catalog_repo
            .save_catalog(&report.products)
            .await
            .map_err(|e| {
                error!(error = %e, "目录写入失败");
                ImportError::CatalogWriteError(e.to_string())
            })?;

        let elapsed_ms = start_time.elapsed().as_millis() as i64;
        info!(
            batch_id = %batch_id,
            count = count,
            warnings = report.warnings.len(),
            elapsed_ms = elapsed_ms,
            "价格目录导入完成"
        );

        Ok(CatalogImportResult {
            batch_id,
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string),
            imported_at: Utc::now(),
            count,
            elapsed_ms,
            report,
        })
    }
}
