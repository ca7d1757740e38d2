// ==========================================
// 价格目录导入系统 - 汇率换算
// ==========================================
// 职责: 币种标记 → 汇率档位 → 调整净价
// 状态: CurrencyMemory 仅在单次导入内有效,由构建器显式传递
// ==========================================

use crate::domain::settings::ExchangeSettings;
use crate::domain::types::CurrencyTier;
use std::collections::HashMap;

/// 第一档币种标记（大写比较）
pub const BILLETE_MARKERS: &[&str] = &["2", "USD", "DOLAR", "DÓLAR", "BILLETE"];

/// 第二档币种标记（大写比较）
pub const DIVISA_MARKERS: &[&str] = &["3", "DIVISA"];

/// 币种标记分类（去空白,不区分大小写）
///
/// 未列出的标记（含 "1"/"ARS"/空）按本币处理
pub fn classify_marker(marker: &str) -> CurrencyTier {
    let upper = marker.trim().to_uppercase();
    if BILLETE_MARKERS.contains(&upper.as_str()) {
        CurrencyTier::Billete
    } else if DIVISA_MARKERS.contains(&upper.as_str()) {
        CurrencyTier::Divisa
    } else {
        CurrencyTier::Local
    }
}

// ==========================================
// CurrencyMemory - 按商品编码记住最近一次币种
// ==========================================
// 写入: 仅由带币种列的工作表写入
// 读取: 无币种列(或该行币种为空)的工作表回退读取
#[derive(Debug, Clone, Default)]
pub struct CurrencyMemory {
    by_code: HashMap<String, String>,
}

impl CurrencyMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录币种（覆盖旧值）; 空标记不记录
    pub fn record(&mut self, code: &str, marker: &str) {
        let marker = marker.trim();
        if !marker.is_empty() {
            self.by_code.insert(code.to_string(), marker.to_string());
        }
    }

    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }
}

/// 应用汇率
///
/// # 参数
/// - net_price: 换算前净价
/// - current_marker: 当前行的币种标记（无币种列时为 None）
/// - prior_marker: CurrencyMemory 中该编码的历史标记
/// - settings: 汇率设置
///
/// # 返回
/// - (调整后净价, 实际使用的币种标记)
pub fn apply_exchange_rate(
    net_price: f64,
    current_marker: Option<&str>,
    prior_marker: Option<&str>,
    settings: &ExchangeSettings,
) -> (f64, Option<String>) {
    let effective = current_marker
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .or_else(|| prior_marker.map(str::trim).filter(|m| !m.is_empty()));

    match effective {
        Some(marker) => {
            let rate = settings.rate_for(classify_marker(marker));
            (net_price * rate, Some(marker.to_string()))
        }
        None => (net_price, None),
    }
}
