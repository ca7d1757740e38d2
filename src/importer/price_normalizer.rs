// ==========================================
// 价格目录导入系统 - 价格归一化
// ==========================================
// 职责: 价格文本解析 / 税类 → 税率乘数 / 由含税终价反推净价 / 输出取整
// ==========================================

use crate::domain::cell::CellValue;

/// 税类标记 → 税率乘数
pub const TAX_CLASS_TABLE: &[(&str, f64)] = &[("501", 1.105), ("503", 1.21)];

/// 标记缺失或无法识别时使用的税率乘数
pub const DEFAULT_TAX_MULTIPLIER: f64 = 1.21;

/// "Final" 价格中固定包含的上游加价系数（数据方给定的业务常量）
pub const FINAL_PRICE_MARKUP: f64 = 1.04;

/// 净价保留位数
pub const NET_PRICE_DECIMALS: u32 = 4;

/// 含税价保留位数
pub const GROSS_PRICE_DECIMALS: u32 = 2;

/// 解析价格单元格
///
/// - 数值: 原样返回
/// - 文本: 去掉货币符号与空白, `.` 视为千分位删除, `,` 视为小数点
/// - 其他或解析失败: 0
///
/// 负数与非有限值一律按 0 处理
pub fn parse_price(cell: &CellValue) -> f64 {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_price_text(s),
        CellValue::Empty | CellValue::Bool(_) => 0.0,
    };

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn parse_price_text(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// 确定行的税类标记: 行内标记优先,否则使用主数据的税类
pub fn resolve_tax_marker(row_marker: &str, master_marker: Option<&str>) -> Option<String> {
    let row_marker = row_marker.trim();
    if !row_marker.is_empty() {
        return Some(row_marker.to_string());
    }

    master_marker
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// 税类标记 → 税率乘数（缺失/未知时为 1.21）
pub fn tax_multiplier(marker: Option<&str>) -> f64 {
    marker
        .and_then(|m| {
            TAX_CLASS_TABLE
                .iter()
                .find(|(code, _)| *code == m.trim())
                .map(|(_, factor)| *factor)
        })
        .unwrap_or(DEFAULT_TAX_MULTIPLIER)
}

/// 输出用税类标记: 有标记用标记,否则由乘数反推
pub fn output_tax_marker(marker: Option<&str>, multiplier: f64) -> String {
    match marker {
        Some(m) => m.to_string(),
        None if multiplier == 1.105 => "501".to_string(),
        None => "503".to_string(),
    }
}

/// 计算净价
///
/// - raw_neto > 0: 直接使用
/// - 否则 raw_final > 0: raw_final / (1.04 × 税率乘数)
/// - 否则 0（调用方据此跳过该行）
pub fn compute_net_price(raw_neto: f64, raw_final: f64, tax_multiplier: f64) -> f64 {
    if raw_neto > 0.0 {
        raw_neto
    } else if raw_final > 0.0 {
        raw_final / (FINAL_PRICE_MARKUP * tax_multiplier)
    } else {
        0.0
    }
}

/// 四舍五入（远离零）到指定小数位
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_price_numeric_passthrough() {
        assert_eq!(parse_price(&CellValue::Number(1234.56)), 1234.56);
        let once = parse_price(&CellValue::Number(99.5));
        assert_eq!(parse_price(&CellValue::Number(once)), once);
    }

    #[test]
    fn test_parse_price_local_format() {
        assert_eq!(parse_price(&text("$1.234,56")), 1234.56);
        assert_eq!(parse_price(&text(" $ 10,5 ")), 10.5);
        assert_eq!(parse_price(&text("1.000.000")), 1_000_000.0);
        assert_eq!(parse_price(&text("US$ 15")), 15.0);
    }

    #[test]
    fn test_parse_price_unparseable_is_zero() {
        assert_eq!(parse_price(&text("")), 0.0);
        assert_eq!(parse_price(&text("abc")), 0.0);
        assert_eq!(parse_price(&text("1,2,3")), 0.0);
        assert_eq!(parse_price(&CellValue::Empty), 0.0);
        assert_eq!(parse_price(&CellValue::Bool(true)), 0.0);
    }

    #[test]
    fn test_parse_price_never_negative() {
        assert_eq!(parse_price(&text("-5")), 0.0);
        assert_eq!(parse_price(&CellValue::Number(-3.0)), 0.0);
        assert_eq!(parse_price(&CellValue::Number(f64::NAN)), 0.0);
    }

    #[test]
    fn test_tax_multiplier_table() {
        assert_eq!(tax_multiplier(Some("501")), 1.105);
        assert_eq!(tax_multiplier(Some("503")), 1.21);
        assert_eq!(tax_multiplier(Some("999")), 1.21);
        assert_eq!(tax_multiplier(None), 1.21);
    }

    #[test]
    fn test_resolve_tax_marker_falls_back_to_master() {
        assert_eq!(resolve_tax_marker("", Some("501")), Some("501".to_string()));
        assert_eq!(resolve_tax_marker(" 503 ", Some("501")), Some("503".to_string()));
        assert_eq!(resolve_tax_marker("", None), None);
        assert_eq!(resolve_tax_marker("", Some("  ")), None);
    }

    #[test]
    fn test_master_fallback_multiplier() {
        let marker = resolve_tax_marker("", Some("501"));
        assert_eq!(tax_multiplier(marker.as_deref()), 1.105);

        let marker = resolve_tax_marker("", None);
        assert_eq!(tax_multiplier(marker.as_deref()), 1.21);
    }

    #[test]
    fn test_compute_net_price_priority() {
        assert_eq!(compute_net_price(100.0, 500.0, 1.21), 100.0);
        assert_eq!(compute_net_price(0.0, 1210.0, 1.21), 1210.0 / (1.04 * 1.21));
        assert_eq!(compute_net_price(0.0, 0.0, 1.21), 0.0);
    }

    #[test]
    fn test_round_to() {
        let net = compute_net_price(0.0, 1210.0, 1.21);
        assert_eq!(round_to(net, 4), (net * 10_000.0).round() / 10_000.0);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_output_tax_marker() {
        assert_eq!(output_tax_marker(Some("501"), 1.105), "501");
        assert_eq!(output_tax_marker(None, 1.105), "501");
        assert_eq!(output_tax_marker(None, 1.21), "503");
        assert_eq!(output_tax_marker(Some("777"), 1.21), "777");
    }
}
