// ==========================================
// 价格目录导入系统 - 汇率设置
// ==========================================
// 用途: 汇率换算的外部只读输入
// 存储: settings.json（由设置接口维护,导入流程不修改）
// ==========================================

use crate::domain::types::CurrencyTier;
use serde::{Deserialize, Serialize};

/// 两档汇率乘数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSettings {
    #[serde(default = "default_rate")]
    pub usd_billete: f64, // 第一档
    #[serde(default = "default_rate")]
    pub usd_divisa: f64,  // 第二档
}

fn default_rate() -> f64 {
    1.0
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            usd_billete: default_rate(),
            usd_divisa: default_rate(),
        }
    }
}

impl ExchangeSettings {
    pub fn new(usd_billete: f64, usd_divisa: f64) -> Self {
        Self {
            usd_billete,
            usd_divisa,
        }
    }

    /// 按币种档位取汇率
    pub fn rate_for(&self, tier: CurrencyTier) -> f64 {
        match tier {
            CurrencyTier::Local => 1.0,
            CurrencyTier::Billete => self.usd_billete,
            CurrencyTier::Divisa => self.usd_divisa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let settings = ExchangeSettings::default();
        assert_eq!(settings.rate_for(CurrencyTier::Billete), 1.0);
        assert_eq!(settings.rate_for(CurrencyTier::Divisa), 1.0);
    }

    #[test]
    fn test_rate_for() {
        let settings = ExchangeSettings::new(1050.0, 980.5);
        assert_eq!(settings.rate_for(CurrencyTier::Local), 1.0);
        assert_eq!(settings.rate_for(CurrencyTier::Billete), 1050.0);
        assert_eq!(settings.rate_for(CurrencyTier::Divisa), 980.5);
    }

    #[test]
    fn test_missing_keys_default_to_one() {
        let settings: ExchangeSettings = serde_json::from_str(r#"{"usd_billete": 900}"#).unwrap();
        assert_eq!(settings.usd_billete, 900.0);
        assert_eq!(settings.usd_divisa, 1.0);
    }
}
