// ==========================================
// 价格目录导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 仅不可恢复的失败走 Err; 缺表/缺列/价格无法解析在报告中记录
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("工作簿不存在: {0}")]
    WorkbookNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xlsm/.xlsb/.xls/.ods/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("工作簿打开失败: {0}")]
    WorkbookOpenError(String),

    #[error("工作表读取失败 (sheet {sheet}): {message}")]
    SheetReadError { sheet: String, message: String },

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 持久化错误 =====
    #[error("目录写入失败: {0}")]
    CatalogWriteError(String),

    // ===== 配置错误 =====
    #[error("配置读取失败 (path: {path}): {message}")]
    ConfigReadError { path: String, message: String },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::WorkbookOpenError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
