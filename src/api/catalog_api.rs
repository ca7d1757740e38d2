// ==========================================
// 价格目录导入系统 - 目录查询 API
// ==========================================
// 职责: 读取已落盘的目录（可见性与加价由调用方处理）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::product::ProductRecord;
use crate::repository::{CatalogRepository, JsonCatalogRepository};

pub struct CatalogApi {
    catalog_repo: JsonCatalogRepository,
}

impl CatalogApi {
    pub fn new(catalog_repo: JsonCatalogRepository) -> Self {
        Self { catalog_repo }
    }

    /// 查询全部商品（按目录文件顺序）
    pub async fn list_products(&self) -> ApiResult<Vec<ProductRecord>> {
        Ok(self.catalog_repo.load_catalog().await?)
    }

    /// 按编码查询单个商品
    pub async fn get_product(&self, code: &str) -> ApiResult<ProductRecord> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ApiError::InvalidInput("商品编码为空".to_string()));
        }

        self.catalog_repo
            .load_catalog()
            .await?
            .into_iter()
            .find(|p| p.code == code)
            .ok_or_else(|| ApiError::NotFound(format!("商品(code={})不存在", code)))
    }
}
