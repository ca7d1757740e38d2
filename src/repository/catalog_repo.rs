// ==========================================
// 价格目录导入系统 - 目录仓储
// ==========================================
// 存储: products.json（商品记录数组,格式化输出）
// 约束: 先写临时文件再重命名,失败时旧目录保持不变
// ==========================================

use crate::domain::product::ProductRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

// ==========================================
// CatalogRepository Trait
// ==========================================
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 整体替换目录
    async fn save_catalog(&self, products: &[ProductRecord]) -> RepositoryResult<usize>;

    /// 读取目录（文件不存在时返回空列表）
    async fn load_catalog(&self) -> RepositoryResult<Vec<ProductRecord>>;
}

// ==========================================
// JsonCatalogRepository
// ==========================================
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn save_catalog(&self, products: &[ProductRecord]) -> RepositoryResult<usize> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(products)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| RepositoryError::io(&temp_path, e))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(RepositoryError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), count = products.len(), "目录已写入");
        Ok(products.len())
    }

    async fn load_catalog(&self) -> RepositoryResult<Vec<ProductRecord>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RepositoryError::io(&self.path, e)),
        }
    }
}
