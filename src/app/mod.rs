// ==========================================
// 价格目录导入系统 - 应用层
// ==========================================
// 职责: 组装 API 实例,供命令行或 HTTP 层使用
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
