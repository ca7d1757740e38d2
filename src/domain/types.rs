// ==========================================
// 价格目录导入系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 币种档位 (Currency Tier)
// ==========================================
// 本币 / 美元现钞 / 美元汇款 三档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyTier {
    Local,   // 本币（汇率 = 1）
    Billete, // 第一档（usd_billete）
    Divisa,  // 第二档（usd_divisa）
}

impl fmt::Display for CurrencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyTier::Local => write!(f, "LOCAL"),
            CurrencyTier::Billete => write!(f, "BILLETE"),
            CurrencyTier::Divisa => write!(f, "DIVISA"),
        }
    }
}

// ==========================================
// 导入警告类型 (Warning Kind)
// ==========================================
// 可恢复的结构问题,不阻断导入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    MissingSheet,        // 工作表不存在,整表跳过
    UnresolvableColumn,  // 表头中找不到该列,该字段按空处理
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MissingSheet => write!(f, "MISSING_SHEET"),
            WarningKind::UnresolvableColumn => write!(f, "UNRESOLVABLE_COLUMN"),
        }
    }
}
