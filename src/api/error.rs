// ==========================================
// 价格目录导入系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户友好的错误消息
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("价格导入失败: {0}")]
    ImportFailed(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("存储错误: {0}")]
    StorageError(String),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportFailed(err.to_string())
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::FileIoError { path, message } => {
                ApiError::StorageError(format!("{}: {}", path, message))
            }
            RepositoryError::SerializationError(msg) => ApiError::StorageError(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
