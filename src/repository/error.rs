// ==========================================
// 价格目录导入系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 文件错误 =====
    #[error("文件读写失败 (path={path}): {message}")]
    FileIoError { path: String, message: String },

    #[error("序列化失败: {0}")]
    SerializationError(String),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

impl RepositoryError {
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        RepositoryError::FileIoError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
