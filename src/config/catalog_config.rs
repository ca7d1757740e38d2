// ==========================================
// 价格目录导入系统 - 安装配置
// ==========================================
// 职责: 数据目录、文件名、工作表布局
// 覆写: 配置文件 > 环境变量 > 默认值
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 数据目录环境变量
pub const DATA_DIR_ENV: &str = "PRICE_CATALOG_DATA_DIR";

// ==========================================
// SheetLayout - 工作表布局
// ==========================================
// price_sheets 的顺序即合并顺序: 后面的表覆盖前面的表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub master_sheet: String,
    pub price_sheets: Vec<String>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            master_sheet: "SB1".to_string(),
            price_sheets: vec!["001".to_string(), "ListaCorte".to_string()],
        }
    }
}

// ==========================================
// CatalogConfig - 安装配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub workbook_file: String,
    pub catalog_file: String,
    pub settings_file: String,
    pub layout: SheetLayout,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: get_default_data_dir(),
            workbook_file: "ListaDeProductos.xlsx".to_string(),
            catalog_file: "products.json".to_string(),
            settings_file: "settings.json".to_string(),
            layout: SheetLayout::default(),
        }
    }
}

impl CatalogConfig {
    /// 以指定数据目录创建默认配置
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// 从 JSON 配置文件加载（缺失字段取默认值）
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.data_dir.join(&self.workbook_file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(&self.settings_file)
    }
}

/// 获取默认数据目录
///
/// 优先使用环境变量 `PRICE_CATALOG_DATA_DIR`,其次是用户数据目录
pub fn get_default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        Some(data_dir) => data_dir.join("price-catalog-dev"),
        #[cfg(not(debug_assertions))]
        Some(data_dir) => data_dir.join("price-catalog"),
        None => PathBuf::from("./data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_layout() {
        let layout = SheetLayout::default();
        assert_eq!(layout.master_sheet, "SB1");
        assert_eq!(layout.price_sheets, vec!["001", "ListaCorte"]);
    }

    #[test]
    fn test_paths_under_data_dir() {
        let config = CatalogConfig::with_data_dir("/srv/catalogo");
        assert_eq!(config.catalog_path(), PathBuf::from("/srv/catalogo/products.json"));
        assert_eq!(config.settings_path(), PathBuf::from("/srv/catalogo/settings.json"));
        assert_eq!(
            config.workbook_path(),
            PathBuf::from("/srv/catalogo/ListaDeProductos.xlsx")
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_dir": "/tmp/x", "layout": {{"price_sheets": ["A", "B", "C"]}}}}"#
        )
        .unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/x"));
        assert_eq!(config.catalog_file, "products.json");
        assert_eq!(config.layout.master_sheet, "SB1");
        assert_eq!(config.layout.price_sheets, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = CatalogConfig::load(file.path());
        assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
    }
}
